use crate::transition::ColorTransition;

/// Black to white, leaving grayscale input unchanged.
pub fn grayscale() -> ColorTransition {
    let mut transition = ColorTransition::new();
    transition.add_point(0, 0, 0, 0);
    transition.add_point(255, 255, 255, 255);
    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        let t = grayscale();
        for v in 0..=255u8 {
            assert_eq!(t.get_color(v), [v, v, v]);
        }
    }
}
