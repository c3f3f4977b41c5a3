//! Host-backed syscall emulation.
//!
//! [`HostSyscalls`] implements the handful of IRIX-numbered system calls small
//! benchmark programs need, backed by host streams:
//!
//! | Number | Call     | Behavior                                           |
//! |--------|----------|----------------------------------------------------|
//! | 1001   | `exit`   | Terminates with status `a0`.                       |
//! | 1003   | `read`   | Reads up to `a2` bytes from fd 0 into `a1`.        |
//! | 1004   | `write`  | Writes `a2` bytes at `a1` to fd 1 or 2.            |
//! | 1013   | `time`   | Returns the cycle count.                           |
//! | 1017   | `brk`    | Records the program break; always succeeds.        |
//! | 1020   | `getpid` | Returns the host process id.                       |
//!
//! The call number is taken from `v0` and arguments from `a0..a2`. Results go to `v0`,
//! with `a3` set to 0 on success and 1 on failure (in which case `v0` holds an errno).

use std::io::{self, Read, Write};

use super::{SyscallContext, SyscallHandler, SyscallOutcome};
use crate::isa::abi::{REG_A0, REG_A1, REG_A2, REG_A3, REG_V0};

/// `exit` syscall number.
pub const SYS_EXIT: u32 = 1001;
/// `read` syscall number.
pub const SYS_READ: u32 = 1003;
/// `write` syscall number.
pub const SYS_WRITE: u32 = 1004;
/// `time` syscall number.
pub const SYS_TIME: u32 = 1013;
/// `brk` syscall number.
pub const SYS_BRK: u32 = 1017;
/// `getpid` syscall number.
pub const SYS_GETPID: u32 = 1020;

/// I/O error.
const EIO: u32 = 5;
/// Bad file descriptor.
const EBADF: u32 = 9;
/// Function not implemented.
pub const ENOSYS: u32 = 89;

/// Largest transfer performed by a single `read` or `write`; longer requests are short.
const MAX_TRANSFER: usize = 1 << 20;

/// Syscall layer forwarding I/O to host streams.
pub struct HostSyscalls {
    stdin: Box<dyn Read>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
    brk: u32,
}

impl Default for HostSyscalls {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSyscalls {
    /// Creates a handler attached to the process's standard streams.
    pub fn new() -> Self {
        Self::with_streams(
            Box::new(io::stdin()),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    /// Creates a handler attached to the given streams.
    ///
    /// # Arguments
    ///
    /// * `stdin` - Source for `read` on fd 0.
    /// * `stdout` - Sink for `write` on fd 1.
    /// * `stderr` - Sink for `write` on fd 2.
    pub fn with_streams(
        stdin: Box<dyn Read>,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
            brk: 0,
        }
    }

    /// Current program break as last set by `brk`.
    pub const fn program_break(&self) -> u32 {
        self.brk
    }

    fn read(&mut self, ctx: &mut SyscallContext<'_>) -> Result<u32, u32> {
        let fd = ctx.get_reg(REG_A0);
        let buf = ctx.get_reg(REG_A1);
        let len = (ctx.get_reg(REG_A2) as usize).min(MAX_TRANSFER);
        if fd != 0 {
            return Err(EBADF);
        }

        let mut data = vec![0u8; len];
        let n = self.stdin.read(&mut data).map_err(|e| {
            tracing::warn!(error = %e, "read syscall failed");
            EIO
        })?;
        write_bytes(ctx, buf, &data[..n]);
        Ok(n as u32)
    }

    fn write(&mut self, ctx: &mut SyscallContext<'_>) -> Result<u32, u32> {
        let fd = ctx.get_reg(REG_A0);
        let buf = ctx.get_reg(REG_A1);
        let len = (ctx.get_reg(REG_A2) as usize).min(MAX_TRANSFER);
        let sink = match fd {
            1 => &mut self.stdout,
            2 => &mut self.stderr,
            _ => return Err(EBADF),
        };

        let data = read_bytes(ctx, buf, len);
        sink.write_all(&data)
            .and_then(|()| sink.flush())
            .map_err(|e| {
                tracing::warn!(error = %e, fd, "write syscall failed");
                EIO
            })?;
        Ok(len as u32)
    }
}

impl SyscallHandler for HostSyscalls {
    fn emulate(&mut self, ctx: &mut SyscallContext<'_>) -> SyscallOutcome {
        let number = ctx.get_reg(REG_V0);
        tracing::debug!(
            number,
            pc = format_args!("{:#010x}", ctx.pc()),
            "syscall"
        );

        let result = match number {
            SYS_EXIT => return SyscallOutcome::Exit(ctx.get_reg(REG_A0) as i32),
            SYS_READ => self.read(ctx),
            SYS_WRITE => self.write(ctx),
            SYS_TIME => Ok(ctx.time() as u32),
            SYS_BRK => {
                self.brk = ctx.get_reg(REG_A0);
                Ok(0)
            }
            SYS_GETPID => Ok(std::process::id()),
            _ => {
                tracing::warn!(
                    number,
                    pc = format_args!("{:#010x}", ctx.pc()),
                    "unimplemented syscall"
                );
                Err(ENOSYS)
            }
        };

        match result {
            Ok(v) => {
                ctx.set_reg(REG_V0, v);
                ctx.set_reg(REG_A3, 0);
            }
            Err(errno) => {
                ctx.set_reg(REG_V0, errno);
                ctx.set_reg(REG_A3, 1);
            }
        }
        SyscallOutcome::Continue
    }
}

/// Copies `len` bytes starting at `addr` out of simulated memory, one word access per
/// word touched.
fn read_bytes(ctx: &mut SyscallContext<'_>, addr: u32, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut word = [0u8; 4];
    for i in 0..len {
        let a = addr.wrapping_add(i as u32);
        if i == 0 || a & 3 == 0 {
            word = ctx.get_word(a & !3).to_be_bytes();
        }
        out.push(word[(a & 3) as usize]);
    }
    out
}

/// Copies `data` into simulated memory at `addr`, merging partial words at either end.
fn write_bytes(ctx: &mut SyscallContext<'_>, addr: u32, data: &[u8]) {
    let mut i = 0;
    while i < data.len() {
        let a = addr.wrapping_add(i as u32);
        let base = a & !3;
        let first = (a & 3) as usize;
        let n = (4 - first).min(data.len() - i);

        let mut word = if n == 4 {
            [0u8; 4]
        } else {
            ctx.get_word(base).to_be_bytes()
        };
        word[first..first + n].copy_from_slice(&data[i..i + n]);
        ctx.set_word(base, u32::from_be_bytes(word));
        i += n;
    }
}
