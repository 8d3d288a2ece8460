/// Branch condition, encoded in bits 5:3 of the conditional
/// jump/call/return opcodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Cond {
    Always,
    NonZero,    // Z = 0
    Zero,       // Z = 1
    NoCarry,    // CY = 0
    Carry,      // CY = 1
    ParityOdd,  // P = 0
    ParityEven, // P = 1
    Plus,       // S = 0
    Minus,      // S = 1
}

impl Cond {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Cond::Always => "",
            Cond::NonZero => "nz",
            Cond::Zero => "z",
            Cond::NoCarry => "nc",
            Cond::Carry => "c",
            Cond::ParityOdd => "po",
            Cond::ParityEven => "pe",
            Cond::Plus => "p",
            Cond::Minus => "m",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Op {
    Nop,

    /// register/memory move; covers MVI when the source is immediate
    Mov,

    /// load register pair with 16-bit immediate
    Lxi,

    /// store A through BC or DE
    Stax,

    /// load A through BC or DE
    Ldax,

    /// store HL at a direct address, L first
    Shld,

    /// load HL from a direct address, L first
    Lhld,

    /// store A at a direct address
    Sta,

    /// load A from a direct address
    Lda,

    Add,
    Adc,
    Sub,
    Sbb,
    Ana,
    Xra,
    Ora,

    /// compare against A: subtract flags without the writeback
    Cmp,

    Inr,
    Dcr,
    Inx,
    Dcx,

    /// HL <- HL + rp; only CY is affected
    Dad,

    /// rotate A left, CY from bit 7
    Rlc,

    /// rotate A right, CY from bit 0
    Rrc,

    /// rotate A left through CY
    Ral,

    /// rotate A right through CY
    Rar,

    /// Decimal Adjust Accumulator after BCD addition
    Daa,

    /// complement A, no flags
    Cma,

    /// set carry
    Stc,

    /// complement carry
    Cmc,

    Jmp(Cond),
    Call(Cond),
    Ret(Cond),

    /// fast restart call to the fixed address 8*n
    Rst(u8),

    /// PC <- HL
    Pchl,

    Push,
    Pop,

    /// swap DE and HL
    Xchg,

    /// swap HL with the word at the top of the stack
    Xthl,

    /// SP <- HL
    Sphl,

    In,
    Out,

    /// interrupt enable/disable; the INTE flip-flop is not modeled,
    /// so these execute with no effect
    Ei,
    Di,

    Hlt,
}
