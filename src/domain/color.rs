/// Pen colors offered by the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PenColor {
    #[default]
    Black,
    Gray,
    Red,
    Pink,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl PenColor {
    pub fn name(&self) -> &'static str {
        match self {
            PenColor::Black => "black",
            PenColor::Gray => "gray",
            PenColor::Red => "red",
            PenColor::Pink => "pink",
            PenColor::Orange => "orange",
            PenColor::Yellow => "yellow",
            PenColor::Green => "green",
            PenColor::Cyan => "cyan",
            PenColor::Blue => "blue",
            PenColor::Magenta => "magenta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        assert_eq!(PenColor::default(), PenColor::Black);
    }

    #[test]
    fn test_names() {
        assert_eq!(PenColor::Black.name(), "black");
        assert_eq!(PenColor::Magenta.name(), "magenta");
    }
}
