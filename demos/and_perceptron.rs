use stepnet::{
    train_perceptron, BooleanTask, DeltaRuleConfig, FnReporter, Model, Perceptron, TrainEvent,
};

fn main() {
    for task in [BooleanTask::And, BooleanTask::Xor] {
        let dataset = task.dataset();
        println!("== {task} ==");

        let mut reporter = FnReporter(|event: TrainEvent<Perceptron>| {
            if let TrainEvent::Progress { step, metric, .. } = event {
                if step % 10 == 0 || metric == 0.0 {
                    println!("Epoch {step}: {metric} errors");
                }
            }
        });
        let outcome = train_perceptron(&dataset, &DeltaRuleConfig::default(), &mut reporter)
            .expect("default configuration is valid");

        println!(
            "converged: {}, w = {:?}, b = {}",
            outcome.converged, outcome.params.weights, outcome.params.bias
        );
        for input in dataset.iter().map(|ex| ex.input) {
            println!("Input: {:?} -> Output: {}", input, outcome.params.predict(&input));
        }
    }
}
