use crate::color::Color;
use crate::easing::Easing;

/// A function from a position in `[0.0, 1.0]` to a [`Color`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Gradient {
    /// The same color at every position.
    Solid(Color),
    /// Two gradients joined at the midpoint.
    Pair(Box<PairGradient>),
}

impl Gradient {
    /// The color at `delta`.
    ///
    /// Positions outside of `[0.0, 1.0]` are passed through to the children
    /// unchanged.
    pub fn get(&self, delta: f32) -> Color {
        match self {
            Gradient::Solid(color) => *color,
            Gradient::Pair(pair) => pair.get(delta),
        }
    }

    /// Returns an equivalent gradient with redundant structure removed.
    pub fn resolve(&self) -> Gradient {
        match self {
            Gradient::Solid(color) => Gradient::Solid(*color),
            Gradient::Pair(pair) => pair.resolve(),
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient::Solid(Color::TRANSPARENT)
    }
}

impl From<Color> for Gradient {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<PairGradient> for Gradient {
    fn from(pair: PairGradient) -> Self {
        Self::Pair(Box::new(pair))
    }
}

/// Blends a `start` gradient into an `end` gradient, with the crossover at
/// the midpoint of the eased position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairGradient {
    pub start: Gradient,
    pub end: Gradient,
    #[cfg_attr(feature = "serde", serde(default))]
    pub easing: Easing,
}

impl PairGradient {
    /// Creates a new [`PairGradient`] with linear easing.
    pub fn new(start: impl Into<Gradient>, end: impl Into<Gradient>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            easing: Easing::Linear,
        }
    }

    /// Creates a new [`PairGradient`] between two fully opaque `0xRRGGBB` colors.
    pub fn from_rgb(start_rgb: u32, end_rgb: u32) -> Self {
        Self::new(Color::from_rgb(start_rgb), Color::from_rgb(end_rgb))
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The color at `delta`.
    ///
    /// The eased position `d` is used as the blend weight on both halves:
    /// below the midpoint `start` is sampled at `d * 2` and blended toward the
    /// start of `end`; from the midpoint on, the end of `start` is blended
    /// toward `end` sampled at `(d - 0.5) * 2`.
    pub fn get(&self, delta: f32) -> Color {
        let d = self.easing.ease_f32(delta);

        if d < 0.5 {
            self.start.get(d * 2.0).lerp(d, self.end.get(0.0))
        } else {
            self.start.get(1.0).lerp(d, self.end.get((d - 0.5) * 2.0))
        }
    }

    /// Collapses to `start` when both halves are equal.
    pub fn resolve(&self) -> Gradient {
        if self.start == self.end {
            log::trace!("collapsing pair gradient with equal halves");
            self.start.clone()
        } else {
            Gradient::Pair(Box::new(self.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_is_constant() {
        let g = Gradient::from(Color::RED);
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(g.get(t), Color::RED);
        }
        assert_eq!(g.resolve(), g);
    }

    #[test]
    fn self_pair_collapses() {
        let g = Gradient::from(Color::from_argb(0x80123456));
        let pair = PairGradient::new(g.clone(), g.clone());
        assert_eq!(pair.resolve(), g);

        let nested = Gradient::from(PairGradient::new(Color::RED, Color::BLUE));
        let pair = PairGradient::new(nested.clone(), nested.clone()).with_easing(Easing::QuadIn);
        assert_eq!(Gradient::from(pair).resolve(), nested);
    }

    #[test]
    fn distinct_pair_does_not_collapse() {
        let pair = PairGradient::new(Color::RED, Color::BLUE);
        assert_eq!(pair.resolve(), Gradient::from(pair.clone()));
    }

    #[test]
    fn solid_pair_end_points() {
        let pair = PairGradient::new(Color::BLACK, Color::WHITE);
        assert_eq!(pair.get(0.0), Color::BLACK);
        assert_eq!(pair.get(1.0), Color::WHITE);
    }

    #[test]
    fn solid_pair_blends_by_eased_position() {
        let pair = PairGradient::new(Color::BLACK, Color::WHITE);
        assert_eq!(pair.get(0.5), Color::from_argb(0xFF808080));
        assert_eq!(pair.get(0.25), Color::from_argb(0xFF404040));

        // Half easing pins every position to the midpoint.
        let pinned = pair.clone().with_easing(Easing::Half);
        assert_eq!(pinned.get(0.0), pair.get(0.5));
        assert_eq!(pinned.get(1.0), pair.get(0.5));

        let min = pair.with_easing(Easing::Min);
        assert_eq!(min.get(1.0), Color::BLACK);
    }

    #[test]
    fn nested_pairs_sample_children() {
        let inner = PairGradient::new(Color::RED, Color::GREEN);
        let outer = PairGradient::new(inner.clone(), Color::BLUE);

        // Below the midpoint the start child is sampled at twice the position.
        let d = 0.2;
        let expected = inner.get(d * 2.0).lerp(d, Color::BLUE);
        assert_eq!(outer.get(d), expected);

        // From the midpoint on, the end of the start child is blended into the end child.
        let d = 0.75;
        let expected = inner.get(1.0).lerp(d, Color::BLUE);
        assert_eq!(outer.get(d), expected);
    }

    #[test]
    fn from_rgb_is_opaque() {
        let pair = PairGradient::from_rgb(0x112233, 0x445566);
        assert_eq!(pair.start, Gradient::Solid(Color::from_argb(0xFF112233)));
        assert_eq!(pair.end, Gradient::Solid(Color::from_argb(0xFF445566)));
        assert_eq!(pair.easing, Easing::Linear);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_forms() {
        let g: Gradient = serde_json::from_str("\"#FF0000\"").unwrap();
        assert_eq!(g, Gradient::Solid(Color::RED));

        let g: Gradient = serde_json::from_str(r#"{"start": "black", "end": "white"}"#).unwrap();
        assert_eq!(g, Gradient::from(PairGradient::new(Color::BLACK, Color::WHITE)));

        let pair = PairGradient::new(Color::RED, Color::BLUE).with_easing(Easing::SineIn);
        let json = serde_json::to_string(&Gradient::from(pair.clone())).unwrap();
        assert_eq!(json, r##"{"start":"#FF0000","end":"#0000FF","easing":"sine_in"}"##);
        let back: Gradient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Gradient::from(pair));
    }
}
