//! Motivational script prompt
//!
//! Turns a weekly summary into the system prompt for the language model that
//! writes the avatar's script. The prompt speaks as the user's future self.

use std::fmt::Write;

use super::weekly::{AvatarTier, WeeklySummary};

/// How a single meal is characterised in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealVerdict {
    Healthy,
    Moderate,
    NeedsImprovement,
}

impl MealVerdict {
    pub fn for_score(score: f64) -> Self {
        if score > 80.0 {
            MealVerdict::Healthy
        } else if score >= 60.0 {
            MealVerdict::Moderate
        } else {
            MealVerdict::NeedsImprovement
        }
    }

    fn guidance(&self) -> &'static str {
        match self {
            MealVerdict::Healthy => "a great choice, encourage more of these",
            MealVerdict::Moderate => "reasonably balanced, suggest one small improvement",
            MealVerdict::NeedsImprovement => "gently suggest a healthier alternative",
        }
    }
}

fn tone(tier: AvatarTier) -> &'static str {
    match tier {
        AvatarTier::High => {
            "The scores are high. Sound proud and encourage them to keep these habits."
        }
        AvatarTier::Medium => {
            "The scores are middling. Acknowledge the progress and push for the next step."
        }
        AvatarTier::Low => {
            "The scores are low. Sound concerned and make the case for changing course now."
        }
    }
}

/// Build the script-writing prompt for a summary
pub fn compose_script_prompt(summary: &WeeklySummary) -> String {
    let mut prompt = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        prompt,
        "You are the user's future self, speaking to them about their recent health data to motivate better habits."
    );
    let _ = writeln!(prompt, "- Wellbeing score: {}/100", summary.wellbeing);
    let _ = writeln!(prompt, "- Activity score: {}/100", summary.activity);
    let _ = writeln!(prompt, "- Sleep score: {}/100", summary.sleep);
    let _ = writeln!(prompt, "- Food score: {}/100", summary.food_score);
    let _ = writeln!(prompt);

    if summary.recent_meals.is_empty() {
        let _ = writeln!(prompt, "No meals were logged in this period.");
    } else {
        let _ = writeln!(prompt, "Recent meals:");
        for meal in &summary.recent_meals {
            let verdict = MealVerdict::for_score(meal.health_score);
            let _ = writeln!(
                prompt,
                "- {} (Health Score: {:.0}/100): {}",
                meal.dish,
                meal.health_score,
                verdict.guidance()
            );
        }
    }
    let _ = writeln!(prompt);

    let _ = writeln!(
        prompt,
        "Explain how today's choices shape their future health and happiness. {}",
        tone(summary.avatar)
    );
    let _ = write!(prompt, "Keep the script between 30 and 45 seconds when spoken.");

    prompt
}
