use crate::infra::InMemorySessionStore;
use clap::Args;
use idea_triage::error::AppError;
use idea_triage::workflows::assessment::{
    AssessmentService, AssessmentServiceError, CaseView, EthicsReview, ScoreCard, ScoreSampler,
    SeededSampler, SessionId, StepForm, ThreadRngSampler, Verdict, CLARIFICATION_PROMPTS,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Idea description to assess
    #[arg(long, default_value = "Automate invoice intake and matching")]
    pub(crate) idea: String,
    /// Clarification answers, repeatable up to three times; missing answers
    /// fall back to sample text
    #[arg(long = "answer")]
    pub(crate) answers: Vec<String>,
    /// Workforce-impact upside notes (defaults apply when omitted)
    #[arg(long)]
    pub(crate) pros: Option<String>,
    /// Workforce-impact downside notes (defaults apply when omitted)
    #[arg(long)]
    pub(crate) cons: Option<String>,
    /// Mark the ethical review as done
    #[arg(long)]
    pub(crate) ethics_considered: bool,
    /// Fixed sampler seed for a reproducible run
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Fixed sampler seed for a reproducible draw
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

const SAMPLE_ANSWERS: [&str; 3] = [
    "Invoice intake and three-way matching",
    "Two accountants, every weekday morning",
    "ERP exports and the shared mail inbox",
];

fn sampler(seed: Option<u64>) -> Arc<dyn ScoreSampler> {
    match seed {
        Some(seed) => Arc::new(SeededSampler::new(seed)),
        None => Arc::new(ThreadRngSampler),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        idea,
        answers,
        pros,
        cons,
        ethics_considered,
        seed,
    } = args;

    let service = AssessmentService::new(Arc::new(InMemorySessionStore::default()), sampler(seed));
    let session = SessionId("demo".to_string());

    let mut filled = SAMPLE_ANSWERS.map(str::to_string);
    for (slot, answer) in filled.iter_mut().zip(answers.into_iter()) {
        *slot = answer;
    }

    let ethics = if ethics_considered {
        EthicsReview::Yes
    } else {
        EthicsReview::No
    };

    println!("Idea triage demo");
    println!("Step 1 - Describe the Idea");
    println!("  Idea: {idea}");

    let forms = [
        StepForm::Idea { description: idea },
        StepForm::Clarifications {
            answers: filled.clone(),
        },
        StepForm::ReviewScores,
        StepForm::Impact { pros, cons, ethics },
    ];

    let mut last: Option<CaseView> = None;
    for form in forms {
        match service.advance(&session, form) {
            Ok(view) => {
                if view.step_index == 2 {
                    println!("\nStep 2 - Clarify the Details");
                    for (prompt, answer) in CLARIFICATION_PROMPTS.iter().zip(filled.iter()) {
                        println!("  {prompt}");
                        println!("    -> {answer}");
                    }
                    if let Some(scores) = view.scores {
                        println!("\nStep 3 - Heuristic Scores");
                        render_score_card(&scores);
                    }
                }
                last = Some(view);
            }
            Err(AssessmentServiceError::Validation(warning)) => {
                println!("\nwarning: {warning}");
                return Ok(());
            }
            Err(AssessmentServiceError::Store(error)) => {
                return Err(AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    error.to_string(),
                )));
            }
        }
    }

    if let Some(view) = last {
        if let Some(impact) = &view.impact {
            println!("\nStep 4 - Workforce Impact");
            println!("  Pros: {}", impact.pros);
            println!("  Cons: {}", impact.cons);
            println!("  Ethics reviewed: {}", impact.ethics_label);
        }
        if let Some(verdict) = &view.verdict {
            println!("\nStep 5 - Recommendation");
            println!("  {} ({})", verdict.label, verdict.color);
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let sampler = sampler(args.seed);
    let card = ScoreCard::from_draw(sampler.draw());
    let verdict = Verdict::from_weighted(card.weighted);

    println!("One-shot score draw");
    render_score_card(&card);
    println!("Verdict: {} ({})", verdict.label(), verdict.tone().color());

    Ok(())
}

fn render_score_card(card: &ScoreCard) {
    println!("  Efficiency:     {}", card.efficiency);
    println!("  Quality:        {}", card.quality);
    println!("  Customer value: {}", card.customer_value);
    println!("  Weighted score: {:.2}", card.weighted);
}
