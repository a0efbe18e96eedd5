#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreCard {
    score: u32,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn increment(&mut self) {
        self.update(1);
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(ScoreCard::new().score(), 0);
    }

    #[test]
    fn test_update_and_increment() {
        let mut card = ScoreCard::new();
        card.update(3);
        card.increment();
        card.update(0);
        assert_eq!(card.score(), 4);
    }

    #[test]
    fn test_never_wraps() {
        let mut card = ScoreCard::new();
        card.update(u32::MAX);
        card.increment();
        assert_eq!(card.score(), u32::MAX);
    }
}
