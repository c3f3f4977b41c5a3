use std::cell::RefCell;
use std::rc::Rc;

use mipsim_core::isa::abi::{REG_A0, REG_A1, REG_A2, REG_V0};
use mipsim_core::sim::syscall::{SyscallContext, SyscallHandler, SyscallOutcome};

/// Value the mock returns in `v0` for every call it does not recognize.
pub const MOCK_RESULT: u32 = 0x5a5a;

/// Exit syscall number understood by the mock.
const SYS_EXIT: u32 = 1001;

/// One serviced syscall as seen by the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyscallRecord {
    pub pc: u32,
    pub cycle: u64,
    pub number: u32,
    pub args: [u32; 3],
}

/// Syscall layer that records every call.
///
/// `1001` exits with status `a0`; anything else writes [`MOCK_RESULT`] to `v0`.
/// The log is shared so a test can inspect it after handing the mock to the simulator.
#[derive(Clone, Debug, Default)]
pub struct RecordingSyscalls {
    pub log: Rc<RefCell<Vec<SyscallRecord>>>,
}

impl RecordingSyscalls {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SyscallHandler for RecordingSyscalls {
    fn emulate(&mut self, ctx: &mut SyscallContext<'_>) -> SyscallOutcome {
        let number = ctx.get_reg(REG_V0);
        self.log.borrow_mut().push(SyscallRecord {
            pc: ctx.pc(),
            cycle: ctx.time(),
            number,
            args: [ctx.get_reg(REG_A0), ctx.get_reg(REG_A1), ctx.get_reg(REG_A2)],
        });

        if number == SYS_EXIT {
            return SyscallOutcome::Exit(ctx.get_reg(REG_A0) as i32);
        }
        ctx.set_reg(REG_V0, MOCK_RESULT);
        SyscallOutcome::Continue
    }
}
