use magnetite_nn::{NetworkBuilder, NetworkError, TrainingData, XorTable};

fn main() -> Result<(), NetworkError> {
    let mut table = XorTable::new(2000);
    let mut network = NetworkBuilder::new(table.topology().clone())
        .eta(0.5)
        .alpha(0.2)
        .build(&mut rand::thread_rng())?;

    let mut pass = 0;
    while let Some(sample) = table.next_sample() {
        pass += 1;
        let outputs = network.feed_forward(&sample.inputs)?;
        network.back_prop(&sample.targets)?;
        if pass % 200 == 0 {
            println!(
                "Pass {pass:4}: {:?} -> {:.4} (target {}), recent average error {:.6}",
                sample.inputs,
                outputs[0],
                sample.targets[0],
                network.recent_average_error()
            );
        }
    }

    println!();
    for (inputs, targets) in XorTable::ROWS {
        let outputs = network.feed_forward(&inputs)?;
        println!(
            "{:.0} xor {:.0} = {:.4}   (want {:.0})",
            inputs[0], inputs[1], outputs[0], targets[0]
        );
    }

    println!();
    print!("{network}");
    Ok(())
}
