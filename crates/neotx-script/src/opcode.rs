use std::fmt;

/// Width of every mnemonic returned by [`OpCode::name`]
pub const MNEMONIC_WIDTH: usize = 11;

/// One-byte VM instruction identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpCode(pub u8);

macro_rules! opcodes {
    ($($(#[$doc:meta])* $name:ident = $code:literal => $mnemonic:literal,)*) => {
        impl OpCode {
            $(
                $(#[$doc])*
                pub const $name: OpCode = OpCode($code);
            )*

            /// Every code with an entry in the mnemonic table, in byte order
            pub const ALL: &'static [OpCode] = &[$(OpCode::$name),*];

            /// Fixed-width mnemonic, or `""` for a code outside the table
            pub const fn name(self) -> &'static str {
                match self.0 {
                    $($code => $mnemonic,)*
                    _ => "",
                }
            }
        }
    };
}

opcodes! {
    /// An empty byte array is pushed onto the stack
    PUSH0 = 0x00 => "PUSH0      ",
    /// 0x01..=0x4B: the next `code` bytes are pushed
    PUSHBYTES1 = 0x01 => "PUSHBYTES1 ",
    PUSHBYTES75 = 0x4B => "PUSHBYTES75",
    /// Next byte is the length of the data pushed
    PUSHDATA1 = 0x4C => "PUSHDATA1  ",
    /// Next two bytes (little endian) are the length of the data pushed
    PUSHDATA2 = 0x4D => "PUSHDATA2  ",
    /// Next four bytes (little endian) are the length of the data pushed
    PUSHDATA4 = 0x4E => "PUSHDATA4  ",
    PUSHM1 = 0x4F => "PUSHM1     ",
    PUSH1 = 0x51 => "PUSH1      ",
    PUSH2 = 0x52 => "PUSH2      ",
    PUSH3 = 0x53 => "PUSH3      ",
    PUSH4 = 0x54 => "PUSH4      ",
    PUSH5 = 0x55 => "PUSH5      ",
    PUSH6 = 0x56 => "PUSH6      ",
    PUSH7 = 0x57 => "PUSH7      ",
    PUSH8 = 0x58 => "PUSH8      ",
    PUSH9 = 0x59 => "PUSH9      ",
    PUSH10 = 0x5A => "PUSH10     ",
    PUSH11 = 0x5B => "PUSH11     ",
    PUSH12 = 0x5C => "PUSH12     ",
    PUSH13 = 0x5D => "PUSH13     ",
    PUSH14 = 0x5E => "PUSH14     ",
    PUSH15 = 0x5F => "PUSH15     ",
    PUSH16 = 0x60 => "PUSH16     ",

    // Flow control
    NOP = 0x61 => "NOP        ",
    JMP = 0x62 => "JMP        ",
    JMPIF = 0x63 => "JMPIF      ",
    JMPIFNOT = 0x64 => "JMPIFNOT   ",
    CALL = 0x65 => "CALL       ",
    RET = 0x66 => "RET        ",
    APPCALL = 0x67 => "APPCALL    ",
    SYSCALL = 0x68 => "SYSCALL    ",
    TAILCALL = 0x69 => "TAILCALL   ",

    // Stack
    DUPFROMALTSTACK = 0x6A => "DUPFROMALTS",
    TOALTSTACK = 0x6B => "TOALTSTACK ",
    FROMALTSTACK = 0x6C => "FROMALTSTAC",
    XDROP = 0x6D => "XDROP      ",
    XSWAP = 0x72 => "XSWAP      ",
    XTUCK = 0x73 => "XTUCK      ",
    DEPTH = 0x74 => "DEPTH      ",
    DROP = 0x75 => "DROP       ",
    DUP = 0x76 => "DUP        ",
    NIP = 0x77 => "NIP        ",
    OVER = 0x78 => "OVER       ",
    PICK = 0x79 => "PICK       ",
    ROLL = 0x7A => "ROLL       ",
    ROT = 0x7B => "ROT        ",
    SWAP = 0x7C => "SWAP       ",
    TUCK = 0x7D => "TUCK       ",

    // Splice
    CAT = 0x7E => "CAT        ",
    SUBSTR = 0x7F => "SUBSTR     ",
    LEFT = 0x80 => "LEFT       ",
    RIGHT = 0x81 => "RIGHT      ",
    SIZE = 0x82 => "SIZE       ",

    // Bitwise logic
    INVERT = 0x83 => "INVERT     ",
    AND = 0x84 => "AND        ",
    OR = 0x85 => "OR         ",
    XOR = 0x86 => "XOR        ",
    EQUAL = 0x87 => "EQUAL      ",

    // Arithmetic
    INC = 0x8B => "INC        ",
    DEC = 0x8C => "DEC        ",
    SIGN = 0x8D => "SIGN       ",
    NEGATE = 0x8F => "NEGATE     ",
    ABS = 0x90 => "ABS        ",
    NOT = 0x91 => "NOT        ",
    NZ = 0x92 => "NZ         ",
    ADD = 0x93 => "ADD        ",
    SUB = 0x94 => "SUB        ",
    MUL = 0x95 => "MUL        ",
    DIV = 0x96 => "DIV        ",
    MOD = 0x97 => "MOD        ",
    SHL = 0x98 => "SHL        ",
    SHR = 0x99 => "SHR        ",
    BOOLAND = 0x9A => "BOOLAND    ",
    BOOLOR = 0x9B => "BOOLOR     ",
    NUMEQUAL = 0x9C => "NUMEQUAL   ",
    NUMNOTEQUAL = 0x9E => "NUMNOTEQUAL",
    LT = 0x9F => "LT         ",
    GT = 0xA0 => "GT         ",
    LTE = 0xA1 => "LTE        ",
    GTE = 0xA2 => "GTE        ",
    MIN = 0xA3 => "MIN        ",
    MAX = 0xA4 => "MAX        ",
    WITHIN = 0xA5 => "WITHIN     ",

    // Crypto
    SHA1 = 0xA7 => "SHA1       ",
    SHA256 = 0xA8 => "SHA256     ",
    HASH160 = 0xA9 => "HASH160    ",
    HASH256 = 0xAA => "HASH256    ",
    CHECKSIG = 0xAC => "CHECKSIG   ",
    CHECKMULTISIG = 0xAE => "CHECKMULTIS",

    // Array
    ARRAYSIZE = 0xC0 => "ARRAYSIZE  ",
    PACK = 0xC1 => "PACK       ",
    UNPACK = 0xC2 => "UNPACK     ",
    PICKITEM = 0xC3 => "PICKITEM   ",
    SETITEM = 0xC4 => "SETITEM    ",
    /// Used as a reference type
    NEWARRAY = 0xC5 => "NEWARRAY   ",
    /// Used as a value type
    NEWSTRUCT = 0xC6 => "NEWSTRUCT  ",

    // Exceptions
    THROW = 0xF0 => "THROW      ",
    THROWIFNOT = 0xF1 => "THROWIFNOT ",
}

impl OpCode {
    /// Alias of PUSH0
    pub const PUSHF: OpCode = OpCode::PUSH0;
    /// Alias of PUSH1
    pub const PUSHT: OpCode = OpCode::PUSH1;

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Whether this code is a direct push of 1..=75 inline bytes
    pub const fn is_push_bytes(self) -> bool {
        self.0 >= OpCode::PUSHBYTES1.0 && self.0 <= OpCode::PUSHBYTES75.0
    }

    /// Whether this code is followed by operand bytes on the wire
    pub const fn has_operand(self) -> bool {
        self.is_push_bytes()
            || self.0 == OpCode::PUSHDATA1.0
            || self.0 == OpCode::PUSHDATA2.0
            || self.0 == OpCode::PUSHDATA4.0
    }
}

impl From<u8> for OpCode {
    fn from(code: u8) -> Self {
        OpCode(code)
    }
}

impl From<OpCode> for u8 {
    fn from(code: OpCode) -> Self {
        code.0
    }
}

impl fmt::Debug for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name().trim_end() {
            "" => write!(f, "OpCode(0x{:02x})", self.0),
            name => write!(f, "OpCode({})", name),
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
