use std::fmt;
use std::ops::Range;

/// One comparable column of a trace line.
///
/// Variants are declared in comparison order: two records are equal only
/// if every field matches, and mismatches are reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceField {
    ProgramCounter,
    OpcodeByte,
    Mnemonic,
    RegisterA,
    RegisterX,
    RegisterY,
    StatusFlags,
    CycleCount,
    StackPointer,
}

impl TraceField {
    /// All fields, in comparison order.
    pub const ALL: [Self; 9] = [
        Self::ProgramCounter,
        Self::OpcodeByte,
        Self::Mnemonic,
        Self::RegisterA,
        Self::RegisterX,
        Self::RegisterY,
        Self::StatusFlags,
        Self::CycleCount,
        Self::StackPointer,
    ];

    /// Short column label as it appears in the trace text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProgramCounter => "PC",
            Self::OpcodeByte => "OP",
            Self::Mnemonic => "MNEM",
            Self::RegisterA => "A",
            Self::RegisterX => "X",
            Self::RegisterY => "Y",
            Self::StatusFlags => "P",
            Self::CycleCount => "CYC",
            Self::StackPointer => "SP",
        }
    }
}

impl fmt::Display for TraceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Byte range of a field within a line (end-exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub start: usize,
    pub end: usize,
}

impl FieldRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn width(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Column offsets of every field in a trace line.
///
/// Both emulators' trace writers and this reader must agree on the table.
/// `version` is bumped whenever an offset moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLayout {
    pub version: u32,
    pub program_counter: FieldRange,
    pub opcode_byte: FieldRange,
    pub mnemonic: FieldRange,
    pub register_a: FieldRange,
    pub register_x: FieldRange,
    pub register_y: FieldRange,
    pub status_flags: FieldRange,
    pub cycle_count: FieldRange,
    pub stack_pointer: FieldRange,
}

impl TraceLayout {
    /// nestest-style layout:
    /// `PC  OP B1 B2  MNE operand...   A:aa X:xx Y:yy P:pp SP:ss CYC:ccc`.
    pub const NESTEST: Self = Self {
        version: 1,
        program_counter: FieldRange::new(0, 4),
        opcode_byte: FieldRange::new(6, 8),
        mnemonic: FieldRange::new(16, 19),
        register_a: FieldRange::new(50, 52),
        register_x: FieldRange::new(55, 57),
        register_y: FieldRange::new(60, 62),
        status_flags: FieldRange::new(65, 67),
        cycle_count: FieldRange::new(78, 81),
        stack_pointer: FieldRange::new(71, 73),
    };

    #[must_use]
    pub const fn range(&self, field: TraceField) -> FieldRange {
        match field {
            TraceField::ProgramCounter => self.program_counter,
            TraceField::OpcodeByte => self.opcode_byte,
            TraceField::Mnemonic => self.mnemonic,
            TraceField::RegisterA => self.register_a,
            TraceField::RegisterX => self.register_x,
            TraceField::RegisterY => self.register_y,
            TraceField::StatusFlags => self.status_flags,
            TraceField::CycleCount => self.cycle_count,
            TraceField::StackPointer => self.stack_pointer,
        }
    }

    /// Minimum line length (in bytes) that covers every field.
    #[must_use]
    pub fn required_len(&self) -> usize {
        TraceField::ALL
            .iter()
            .map(|&field| self.range(field).end)
            .max()
            .unwrap_or(0)
    }
}

impl Default for TraceLayout {
    fn default() -> Self {
        Self::NESTEST
    }
}
