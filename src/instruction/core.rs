use crate::error::{FlowError, Result};
use crate::widget::WidgetId;

/// One-shot modifier in effect while scanning a rule string.
///
/// `=` selects [`Modifier::Expand`], `/` selects [`Modifier::Center`]. A
/// modifier applies to the single direction character that follows it; when
/// two modifiers appear back to back the later one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    Expand,
    Center,
}

/// The three placement families a directive can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Move,
    Expand,
    Center,
}

/// Fully decoded placement directive: family crossed with compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ExpandLeft,
    ExpandRight,
    ExpandUp,
    ExpandDown,
    CenterLeft,
    CenterRight,
    CenterUp,
    CenterDown,
}

impl Directive {
    /// Decode one direction character under the current modifier.
    pub fn decode(c: char, modifier: Modifier) -> Result<Self> {
        match (modifier, c) {
            (Modifier::None, '<') => Ok(Self::MoveLeft),
            (Modifier::None, '>') => Ok(Self::MoveRight),
            (Modifier::None, '^') => Ok(Self::MoveUp),
            (Modifier::None, 'v') => Ok(Self::MoveDown),
            (Modifier::Expand, '<') => Ok(Self::ExpandLeft),
            (Modifier::Expand, '>') => Ok(Self::ExpandRight),
            (Modifier::Expand, '^') => Ok(Self::ExpandUp),
            (Modifier::Expand, 'v') => Ok(Self::ExpandDown),
            (Modifier::Center, '<') => Ok(Self::CenterLeft),
            (Modifier::Center, '>') => Ok(Self::CenterRight),
            (Modifier::Center, '^') => Ok(Self::CenterUp),
            (Modifier::Center, 'v') => Ok(Self::CenterDown),
            _ => Err(FlowError::InvalidInstruction { token: c }),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::MoveLeft | Self::MoveRight | Self::MoveUp | Self::MoveDown => Kind::Move,
            Self::ExpandLeft | Self::ExpandRight | Self::ExpandUp | Self::ExpandDown => Kind::Expand,
            Self::CenterLeft | Self::CenterRight | Self::CenterUp | Self::CenterDown => Kind::Center,
        }
    }

    /// Signed unit step along the x axis: -1 left, 1 right, 0 otherwise.
    pub fn x_step(&self) -> i32 {
        match self {
            Self::MoveLeft | Self::ExpandLeft | Self::CenterLeft => -1,
            Self::MoveRight | Self::ExpandRight | Self::CenterRight => 1,
            _ => 0,
        }
    }

    /// Signed unit step along the y axis: -1 up, 1 down, 0 otherwise.
    pub fn y_step(&self) -> i32 {
        match self {
            Self::MoveUp | Self::ExpandUp | Self::CenterUp => -1,
            Self::MoveDown | Self::ExpandDown | Self::CenterDown => 1,
            _ => 0,
        }
    }
}

/// A directive bound to the widget it positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub widget: WidgetId,
    pub directive: Directive,
}

/// Expand a rule string into ordered instructions bound to `widget`.
///
/// Direction tokens are emitted left to right; each consumes the pending
/// modifier and resets it. A rule that ends with an unconsumed modifier is
/// rejected, as is any character outside the grammar.
pub fn parse_rule(widget: &WidgetId, rule: &str) -> Result<Vec<Instruction>> {
    let mut modifier = Modifier::None;
    let mut instructions = Vec::new();

    for c in rule.chars() {
        match c {
            '=' => modifier = Modifier::Expand,
            '/' => modifier = Modifier::Center,
            _ => {
                let directive = Directive::decode(c, modifier)?;
                modifier = Modifier::None;
                instructions.push(Instruction {
                    widget: widget.clone(),
                    directive,
                });
            }
        }
    }

    match modifier {
        Modifier::None => Ok(instructions),
        Modifier::Expand => Err(FlowError::DanglingModifier { modifier: '=' }),
        Modifier::Center => Err(FlowError::DanglingModifier { modifier: '/' }),
    }
}
