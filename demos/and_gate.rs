use perceptron::Perceptron;

fn main() {
    let mut model = Perceptron::new(2, Perceptron::DEFAULT_BIAS, Perceptron::DEFAULT_LEARNING_RATE)
        .expect("valid construction parameters");

    let dataset = [
        ([-1.0, -1.0], -1.0),
        ([-1.0, 1.0], -1.0),
        ([1.0, -1.0], -1.0),
        ([1.0, 1.0], 1.0),
    ];

    let epochs = 50;
    for epoch in 0..epochs {
        for (inputs, label) in &dataset {
            model.train(inputs, *label).expect("valid training example");
        }
        if epoch % 10 == 0 {
            println!("Epoch {epoch}: iteration error = {:.6}", model.iteration_error());
        }
    }

    for (inputs, label) in &dataset {
        let output = model.predict(inputs).expect("valid input length");
        println!("Input: {:?} -> Output: {output:+.0} (expected {label:+.0})", inputs);
    }
}
