use curry_engine::curry;

#[curry]
fn add(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    a + b + c + d + e
}

#[curry]
fn mutable_add(a: i32, b: i32, mut c: i32, d: i32, e: i32) -> i32 {
    c += 1;
    a + b + c + d + e
}

#[curry]
fn join<T: ToString>(left: T, right: T) -> String {
    format!("{}{}", left.to_string(), right.to_string())
}

#[curry]
fn nine(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8) -> Vec<u8> {
    vec![a, b, c, d, e, f, g, h, i]
}

#[test]
fn original_function_is_kept() {
    assert_eq!(add(1, 1, 1, 1, 2), 6);
}

#[test]
fn one_at_a_time() -> Result<(), curry_engine::CurryError> {
    let result = add_curried()
        .call([1])
        .call([1])?
        .call([1])?
        .call([1])?
        .call([2])?
        .value();
    assert_eq!(result, Some(6));
    Ok(())
}

#[test]
fn mutable_parameters() {
    let partial = mutable_add_curried().call([1, 1]).more().unwrap();
    assert_eq!(partial.call([1, 1, 2]).value(), Some(7));
}

#[test]
fn generic_parameters() {
    let curried = join_curried::<u16>();
    assert_eq!(curried.arity(), 2);
    assert_eq!(curried.call([4]).call([2]).unwrap().value(), Some("42".to_string()));
}

#[test]
fn arity_past_tuple_impls() {
    let curried = nine_curried();
    assert_eq!(curried.arity(), 9);

    let partial = curried.call(1..=4).more().unwrap();
    assert_eq!(partial.remaining(), 5);
    assert_eq!(partial.call(5..=10).value(), Some((1..=9).collect::<Vec<u8>>()));
}
