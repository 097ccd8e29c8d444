/// Per-iteration decisions for the runner loop
pub struct Coalescer;

impl Coalescer {
    /// Draw when nothing has been drawn yet, when the terminal asked for a
    /// frame, or when input may have changed what is on screen
    #[inline]
    pub fn decide_render(first_frame: bool, saw_render_event: bool, handled_input: bool) -> bool {
        first_frame || saw_render_event || handled_input
    }

    /// Several resizes queued in one iteration collapse into the last one
    #[inline]
    pub fn decide_resize(requests: &[(u16, u16)]) -> Option<(u16, u16)> {
        requests.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::Coalescer;

    #[rstest]
    #[case(false, false, false, false)]
    #[case(true, false, false, true)]
    #[case(false, true, false, true)]
    #[case(false, false, true, true)]
    #[case(true, true, true, true)]
    fn test_decide_render(
        #[case] first_frame: bool,
        #[case] saw_render: bool,
        #[case] handled_input: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(
            Coalescer::decide_render(first_frame, saw_render, handled_input),
            expected
        );
    }

    #[test]
    fn test_decide_resize_keeps_last() {
        assert_eq!(Coalescer::decide_resize(&[]), None);
        assert_eq!(Coalescer::decide_resize(&[(80, 24)]), Some((80, 24)));
        assert_eq!(
            Coalescer::decide_resize(&[(80, 24), (100, 30), (120, 40)]),
            Some((120, 40))
        );
    }
}
