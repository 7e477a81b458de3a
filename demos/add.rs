use curry_engine::value::{curry_value, NativeFn, Value};
use curry_engine::{curry, CurryError};
use tracing_subscriber::EnvFilter;

#[curry]
fn get_sum(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

fn main() -> Result<(), CurryError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let curried = get_sum_curried();

    let all = curried.call([1, 2, 3]).value();
    let two_then_one = curried.call([1, 2]).call([3])?.value();
    let one_at_a_time = curried.call([1]).call([2])?.call([3])?.value();
    assert_eq!(all, Some(6));
    assert_eq!(two_then_one, all);
    assert_eq!(one_at_a_time, all);

    tracing::info!(?all, ?two_then_one, ?one_at_a_time, "typed get_sum");

    let dynamic = NativeFn::fixed("getSum", 3, |args| args[0].add(&args[1])?.add(&args[2]));
    let curried = curry_value(&dynamic.into(), None)?;
    let partial = curried.call([Value::Int(1)]);

    match partial.call([Value::Int(2), Value::Int(3)])?.value() {
        Some(Ok(sum)) => tracing::info!(%sum, "dynamic getSum"),
        Some(Err(error)) => tracing::warn!(%error, "dynamic getSum failed"),
        None => tracing::warn!("dynamic getSum still needs arguments"),
    }

    let mismatched = curried
        .call([Value::Int(1), Value::from("2")])
        .call([Value::Int(3)])?;
    if let Some(Err(error)) = mismatched.value() {
        tracing::info!(%error, "adding a string to an int fails when the chain is satisfied");
    }

    Ok(())
}
