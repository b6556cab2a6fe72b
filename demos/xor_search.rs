use stepnet::{random_search, BooleanTask, Model, RandomSearchConfig, TrainEvent, TwoLayerNetwork};

fn main() {
    let xor = BooleanTask::Xor.dataset();
    let config = RandomSearchConfig { seed: Some(2024), ..Default::default() };

    let mut events: Vec<TrainEvent<TwoLayerNetwork>> = Vec::new();
    let outcome = random_search::<TwoLayerNetwork, _>(&xor, &config, &mut events)
        .expect("default configuration is valid");

    for event in &events {
        if let TrainEvent::Progress { step, metric, .. } = event {
            println!("Iteration {step}: best MSE = {metric}");
        }
    }
    println!("converged: {} after {} iterations", outcome.converged, outcome.steps);

    for row in outcome.params.verify(&xor) {
        println!("Input: {:?} -> Output: {} (expected {})", row.input, row.predicted, row.expected);
    }
}
