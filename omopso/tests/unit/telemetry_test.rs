use super::*;
use std::sync::{Arc, Mutex};

fn create_logging_telemetry(log_every: usize) -> (Telemetry, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(vec![]));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |message: &str| messages.lock().unwrap().push(message.to_string()))
    };

    (Telemetry::new(TelemetryMode::OnlyLogging { logger, log_every }), messages)
}

fn create_statistics(iteration: usize) -> OptimizerStatistics {
    OptimizerStatistics {
        iteration,
        evaluations: (iteration + 1) * 10,
        archive_size: 3,
        improvements: 7,
        time: Timer::start(),
    }
}

#[test]
fn can_log_progress_periodically() {
    let (telemetry, messages) = create_logging_telemetry(5);

    (1..=10).for_each(|iteration| telemetry.on_iteration(&create_statistics(iteration), Timer::start()));

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("iteration 5 took"));
    assert!(messages[0].contains("evaluations: 60, archive size: 3, improvements: 7"));
    assert!(messages[1].contains("iteration 10 took"));
}

#[test]
fn can_log_initial_and_result() {
    let (telemetry, messages) = create_logging_telemetry(1);

    telemetry.on_initial(&create_statistics(0), 10, Timer::start());
    telemetry.on_result(&create_statistics(4));

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("initialized swarm of 10 particles"));
    assert!(messages[1].contains("total iterations: 4, evaluations: 50, front size: 3"));
}

#[test]
fn can_treat_zero_log_every_as_every_iteration() {
    let (telemetry, messages) = create_logging_telemetry(0);

    (1..=3).for_each(|iteration| telemetry.on_iteration(&create_statistics(iteration), Timer::start()));

    assert_eq!(messages.lock().unwrap().len(), 3);
}

#[test]
fn can_stay_silent_without_logging() {
    let telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_initial(&create_statistics(0), 10, Timer::start());
    telemetry.on_iteration(&create_statistics(1), Timer::start());
    telemetry.on_result(&create_statistics(1));
    telemetry.log("message");
}
