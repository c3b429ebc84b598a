use mse_metric::{ComputeOptions, MeanSquaredError, Metric, Multioutput, Targets};

fn main() -> mse_metric::Result<()> {
    let metric = MeanSquaredError::new();

    let predictions = Targets::from(vec![3.0, -0.5, 2.0, 7.0]);
    let references = Targets::from(vec![2.5, 0.0, 2.0, 8.0]);

    let mse = metric.compute(&predictions, &references, &ComputeOptions::new())?;
    let rmse = metric.compute(&predictions, &references, &ComputeOptions::new().with_squared(false))?;
    println!("single output  MSE = {:?}", mse["mean_squared_error"]);
    println!("single output RMSE = {:?}", rmse["mean_squared_error"]);

    let predictions = Targets::from(vec![vec![0.0, 2.0], vec![-1.0, 2.0], vec![8.0, -5.0]]);
    let references = Targets::from(vec![vec![0.5, 1.0], vec![-1.0, 1.0], vec![7.0, -6.0]]);

    for multioutput in [
        Multioutput::RawValues,
        Multioutput::UniformAverage,
        Multioutput::Weights(vec![0.3, 0.7]),
    ] {
        let label = multioutput.to_string();
        let options = ComputeOptions::new().with_multioutput(multioutput);
        let out = metric.compute(&predictions, &references, &options)?;
        println!("multi output ({label}) MSE = {:?}", out["mean_squared_error"]);
    }

    Ok(())
}
