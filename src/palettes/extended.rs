use crate::transition::ColorTransition;

/// Height map coloring: deep water, shore, grass, rock and snow caps.
pub fn terrain() -> ColorTransition {
    let mut transition = ColorTransition::new();
    transition.add_point(0, 0, 0, 80);
    transition.add_point(90, 30, 90, 200);
    transition.add_point(100, 220, 210, 150);
    transition.add_point(110, 60, 150, 40);
    transition.add_point(170, 40, 90, 30);
    transition.add_point(200, 110, 100, 90);
    transition.add_point(230, 240, 240, 240);
    transition.add_point(255, 255, 255, 255);
    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shore_is_sand() {
        assert_eq!(terrain().get_color(100), [220, 210, 150]);
        assert_eq!(terrain().len(), 8);
    }
}
