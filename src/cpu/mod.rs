mod cpu;
mod decoder;
mod flags;
mod instruction;
mod io;
mod op;
mod register;

pub use self::cpu::CPU;
pub use self::decoder::Decoder;
pub use self::flags::Flags;
pub use self::instruction::{Instruction, InstructionInfo, Parameter, ParameterSet};
pub use self::io::{IoHandler, NullIo};
pub use self::op::{Op, Cond};
pub use self::register::{Register16, RegisterFile, R8, R16};
