use crate::quiz_engine::models::{ResultReport, ResultTier};

/// `round(100 * score / total)`, half rounding up. Zero when `total` is 0.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total) as u64;
    let total = total as u64;
    ((200 * score + total) / (2 * total)) as u32
}

impl ResultTier {
    /// Highest matching threshold wins.
    pub fn from_percentage(percentage: u32) -> ResultTier {
        match percentage {
            p if p >= 100 => ResultTier::Perfect,
            p if p >= 80  => ResultTier::Excellent,
            p if p >= 60  => ResultTier::Good,
            p if p >= 40  => ResultTier::NeedsWork,
            _             => ResultTier::Poor,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResultTier::Perfect   => "Flawless result!",
            ResultTier::Excellent => "Excellent work!",
            ResultTier::Good      => "Good job!",
            ResultTier::NeedsWork => "Could be better!",
            ResultTier::Poor      => "Keep practicing!",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ResultTier::Perfect   => "fas fa-crown",
            ResultTier::Excellent => "fas fa-star",
            ResultTier::Good      => "fas fa-medal",
            ResultTier::NeedsWork => "fas fa-award",
            ResultTier::Poor      => "fas fa-book",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ResultTier::Perfect   => "#f1c40f",
            ResultTier::Excellent => "#2ecc71",
            ResultTier::Good      => "#3498db",
            ResultTier::NeedsWork => "#9b59b6",
            ResultTier::Poor      => "#e74c3c",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Perfect =>
                "Amazing! You know every word in the set. A perfect score!",
            ResultTier::Excellent =>
                "Great result! You know these words well. Keep it up!",
            ResultTier::Good =>
                "Good result! You know the basic words. Keep practicing!",
            ResultTier::NeedsWork =>
                "Not bad! There is room to grow. Review the words and try again!",
            ResultTier::Poor =>
                "These words need another look. Try again and you will get there!",
        }
    }
}

/// Final report for `score` correct answers out of `total` questions.
pub fn compute_result(score: usize, total: usize) -> ResultReport {
    let percentage = percentage(score, total);
    let tier = ResultTier::from_percentage(percentage);
    ResultReport {
        score,
        total,
        percentage,
        tier,
        title: tier.title().to_string(),
        message: tier.message().to_string(),
        icon: tier.icon().to_string(),
        color: tier.color().to_string(),
    }
}
