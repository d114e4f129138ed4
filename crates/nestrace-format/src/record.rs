use super::{ParseError, TraceField, TraceLayout};

/// Comparable fields of one trace line.
///
/// Fields borrow straight from the line and are never converted to numbers:
/// `a5` and `A5` are different values. Field declaration order is the
/// comparison order, so the derived `PartialEq` is an ordered tuple compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceRecord<'a> {
    pub program_counter: &'a str,
    pub opcode_byte: &'a str,
    pub mnemonic: &'a str,
    pub register_a: &'a str,
    pub register_x: &'a str,
    pub register_y: &'a str,
    pub status_flags: &'a str,
    pub cycle_count: &'a str,
    pub stack_pointer: &'a str,
}

impl<'a> TraceRecord<'a> {
    /// Slice a trace line into its fields.
    ///
    /// Field contents are not validated. Bytes outside the layout's columns
    /// (operand text, PPU counters, trailing whitespace) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TooShort`] if the line does not reach the last
    /// column, and [`ParseError::NotCharBoundary`] if a column would split a
    /// multi-byte character.
    pub fn parse(line: &'a str, layout: &TraceLayout) -> Result<Self, ParseError> {
        let required = layout.required_len();
        if line.len() < required {
            return Err(ParseError::TooShort {
                len: line.len(),
                required,
            });
        }

        let slice = |field: TraceField| {
            line.get(layout.range(field).as_range())
                .ok_or(ParseError::NotCharBoundary { field })
        };

        Ok(Self {
            program_counter: slice(TraceField::ProgramCounter)?,
            opcode_byte: slice(TraceField::OpcodeByte)?,
            mnemonic: slice(TraceField::Mnemonic)?,
            register_a: slice(TraceField::RegisterA)?,
            register_x: slice(TraceField::RegisterX)?,
            register_y: slice(TraceField::RegisterY)?,
            status_flags: slice(TraceField::StatusFlags)?,
            cycle_count: slice(TraceField::CycleCount)?,
            stack_pointer: slice(TraceField::StackPointer)?,
        })
    }

    #[must_use]
    pub const fn field(&self, field: TraceField) -> &'a str {
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

    /// Fields that differ from `other`, in comparison order.
    #[must_use]
    pub fn mismatched_fields(&self, other: &Self) -> Vec<TraceField> {
        TraceField::ALL
            .into_iter()
            .filter(|&field| self.field(field) != other.field(field))
            .collect()
    }
}
