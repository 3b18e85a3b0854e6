/// Final score payload exposed once a session reaches the finished phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        QuizResult {
            score,
            total,
            percentage: score as f64 / total as f64 * 100.0,
        }
    }

    pub fn tier(&self) -> Tier {
        Tier::for_percentage(self.percentage)
    }
}

/// Score bands for the closing message. Boundaries are inclusive: exactly
/// 90% lands in the top tier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tier {
    Outstanding,
    Great,
    Good,
    Practice,
}

impl Tier {
    pub fn for_percentage(percentage: f64) -> Tier {
        if percentage >= 90.0 {
            Tier::Outstanding
        } else if percentage >= 70.0 {
            Tier::Great
        } else if percentage >= 50.0 {
            Tier::Good
        } else {
            Tier::Practice
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Outstanding => "Outstanding! You're a Canada expert!",
            Tier::Great => "Great job! You know a lot about Canada!",
            Tier::Good => "Good work! Keep learning about Canada!",
            Tier::Practice => "Nice try! Practice makes perfect!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::Outstanding => "🌟",
            Tier::Great => "🎉",
            Tier::Good => "👍",
            Tier::Practice => "💪",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_keeps_full_precision() {
        assert_eq!(QuizResult::new(7, 10).percentage, 70.0);
        assert_eq!(QuizResult::new(1, 8).percentage, 12.5);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::for_percentage(100.0), Tier::Outstanding);
        assert_eq!(Tier::for_percentage(90.0), Tier::Outstanding);
        assert_eq!(Tier::for_percentage(89.9), Tier::Great);
        assert_eq!(Tier::for_percentage(70.0), Tier::Great);
        assert_eq!(Tier::for_percentage(69.9), Tier::Good);
        assert_eq!(Tier::for_percentage(50.0), Tier::Good);
        assert_eq!(Tier::for_percentage(49.9), Tier::Practice);
        assert_eq!(Tier::for_percentage(0.0), Tier::Practice);
    }

    #[test]
    fn nine_out_of_ten_is_top_tier() {
        assert_eq!(QuizResult::new(9, 10).tier(), Tier::Outstanding);
    }
}
