//! Enumerations that describe device options.

use crate::wire_enum::wire_enum;

wire_enum! {
    /// `SANE_Value_Type`: how an option's value is represented.
    pub enum ValueType {
        Boolean = 0 => "boolean",
        Integer = 1 => "integer",
        /// 16.16 fixed point, see [`SaneWord::for_fixed_precision`](crate::SaneWord::for_fixed_precision).
        Fixed = 2 => "fixed",
        String = 3 => "string",
        Button = 4 => "button",
        Group = 5 => "group",
    }
}

wire_enum! {
    /// `SANE_Unit`: physical unit of an option's value.
    pub enum Unit {
        None = 0 => "none",
        Pixel = 1 => "pixel",
        Bit = 2 => "bit",
        Millimeter = 3 => "mm",
        Dpi = 4 => "dpi",
        Percent = 5 => "percent",
        Microsecond = 6 => "us",
    }
}

wire_enum! {
    /// `SANE_Constraint_Type`: restriction on an option's legal values.
    pub enum ConstraintType {
        None = 0 => "none",
        Range = 1 => "range",
        WordList = 2 => "word_list",
        StringList = 3 => "string_list",
    }
}

wire_enum! {
    /// `SANE_Action`: what a control-option request does.
    pub enum ControlAction {
        GetValue = 0 => "get_value",
        SetValue = 1 => "set_value",
        SetAuto = 2 => "set_auto",
    }
}
