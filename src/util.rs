use enum_map::Enum;
use ratatui::layout::{Rect, Size};

/// Return a `Rect` of size `size` (shrunk to fit if necessary) centered
/// within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Navigation helpers for fieldless enums deriving [`Enum`]
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(40, 10), Rect::new(20, 7, 40, 10))]
    #[case(Rect::new(10, 2, 21, 11), Size::new(10, 4), Rect::new(15, 5, 10, 4))]
    #[case(Rect::new(0, 0, 20, 10), Size::new(40, 12), Rect::new(0, 0, 20, 10))]
    #[case(Rect::ZERO, Size::new(4, 4), Rect::ZERO)]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Abc {
        A,
        B,
        C,
    }

    #[test]
    fn enum_ext() {
        assert_eq!(Abc::min(), Abc::A);
        assert_eq!(Abc::max(), Abc::C);
        assert_eq!(Abc::iter().collect::<Vec<_>>(), [Abc::A, Abc::B, Abc::C]);
        assert_eq!(Abc::B.next(), Some(Abc::C));
        assert_eq!(Abc::C.next(), None);
        assert_eq!(Abc::A.prev(), None);
        assert_eq!(Abc::B.prev(), Some(Abc::A));
    }
}
