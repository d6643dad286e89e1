use std::io;
use std::sync::Arc;

use services::{Notifier, QuizController, QuizStore, SharedQuizState, TutorApi, TutorConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tutor_core::model::{AttemptTally, Difficulty, QuizState, Selection, ToastDraft, Topic};

type Input = Lines<BufReader<Stdin>>;

/// Prints notices to stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, draft: ToastDraft) {
        match (draft.title.as_deref(), draft.description.as_deref()) {
            (Some(title), Some(description)) => eprintln!("{title}: {description}"),
            (Some(text), None) | (None, Some(text)) => eprintln!("{text}"),
            (None, None) => {}
        }
    }
}

/// Question/answer loop against the backend until the user quits or stdin closes.
pub async fn run_quiz(
    api: Arc<dyn TutorApi>,
    config: &TutorConfig,
    topic: Option<Topic>,
    difficulty: Option<Difficulty>,
) -> io::Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let topic = match topic {
        Some(topic) => Some(topic),
        None => prompt_choice(&mut input, "Topic", &Topic::ALL, Topic::label).await?,
    };
    let Some(topic) = topic else { return Ok(()) };
    let difficulty = match difficulty {
        Some(difficulty) => Some(difficulty),
        None => {
            prompt_choice(&mut input, "Difficulty", &Difficulty::ALL, Difficulty::label).await?
        }
    };
    let Some(difficulty) = difficulty else { return Ok(()) };

    let store = SharedQuizState::new(QuizState::with_selection(Selection::new(
        Some(topic),
        Some(difficulty),
    )));
    let controller = QuizController::new(api, store.clone(), StderrNotifier)
        .with_feedback_reveal_delay(config.feedback_reveal_delay());

    println!("{} · {}", topic.label(), difficulty.label());

    loop {
        if controller.request_question().await.is_err() {
            if confirm(&mut input, "Try again?").await? {
                continue;
            }
            break;
        }

        let Some(question) = store.snapshot().question().cloned() else {
            break;
        };
        println!();
        println!("{}", question.text());
        if question.options().is_empty() {
            println!("(this question has no options)");
            if confirm(&mut input, "Next question?").await? {
                continue;
            }
            break;
        }
        for (index, option) in question.options().iter().enumerate() {
            println!("  {}. {}", index + 1, option.text());
        }

        let count = question.options().len();
        let answer = loop {
            let label = format!("Answer [1-{count}], hint or quit");
            let Some(line) = prompt(&mut input, &label).await? else {
                return finish(&store);
            };
            match parse_answer_input(&line, count) {
                AnswerInput::Quit => return finish(&store),
                AnswerInput::Hint => match question.hint() {
                    Some(step) => println!("Hint: {step}"),
                    None => println!("No hint available for this question."),
                },
                AnswerInput::Choice(index) => break question.options()[index].text().to_string(),
                AnswerInput::Invalid => {
                    eprintln!("Enter a number between 1 and {count}, hint, or quit.");
                }
            }
        };
        store.update(|state| state.select_answer(&answer));

        println!("Checking...");
        if controller.submit_answer().await.is_ok() {
            print_feedback(&store.snapshot());
        }

        if !confirm(&mut input, "Next question?").await? {
            break;
        }
    }

    finish(&store)
}

/// One line typed at the answer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnswerInput {
    Quit,
    Hint,
    /// Zero-based option index.
    Choice(usize),
    Invalid,
}

fn parse_answer_input(line: &str, option_count: usize) -> AnswerInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return AnswerInput::Quit;
    }
    if line.eq_ignore_ascii_case("hint") || line.eq_ignore_ascii_case("h") {
        return AnswerInput::Hint;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=option_count).contains(&n) => AnswerInput::Choice(n - 1),
        _ => AnswerInput::Invalid,
    }
}

fn print_feedback(state: &QuizState) {
    let Some(feedback) = state.feedback() else {
        return;
    };
    if feedback.is_correct() {
        println!("Correct! 🎉");
    } else {
        println!("Not quite right.");
    }
    if !feedback.explanation().is_empty() {
        println!("{}", feedback.explanation());
    }
    if !feedback.solution_steps().is_empty() {
        println!("Solution Steps:");
        for (index, step) in feedback.solution_steps().iter().enumerate() {
            println!("  {}. {step}", index + 1);
        }
    }
    if let Some(stats) = feedback.stats() {
        println!(
            "{} of {} attempts correct ({:.0}%)",
            stats.correct_attempts, stats.total_attempts, stats.success_rate
        );
    }
}

fn finish(store: &SharedQuizState) -> io::Result<()> {
    let tally = AttemptTally::from_attempts(store.snapshot().history());
    if tally.total > 0 {
        println!("Session: {} of {} correct", tally.correct, tally.total);
    }
    Ok(())
}

async fn prompt(input: &mut Input, label: &str) -> io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{label}: ").as_bytes()).await?;
    stdout.flush().await?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

async fn confirm(input: &mut Input, label: &str) -> io::Result<bool> {
    let answer = prompt(input, &format!("{label} [y/N]")).await?;
    Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes")))
}

/// `None` when stdin closes or the user quits.
async fn prompt_choice<T: Copy>(
    input: &mut Input,
    label: &str,
    choices: &[T],
    name: fn(T) -> &'static str,
) -> io::Result<Option<T>> {
    for (index, choice) in choices.iter().enumerate() {
        println!("  {}. {}", index + 1, name(*choice));
    }
    loop {
        let Some(line) = prompt(input, &format!("{label} [1-{}]", choices.len())).await? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Ok(Some(choices[n - 1])),
            _ => eprintln!("Enter a number between 1 and {}.", choices.len()),
        }
    }
}
