use crate::Curried;

/// A function whose arity is known from its type.
///
/// `Args` is the tuple of parameter types. It only exists to keep the
/// implementations for different arities apart, the way `Fn(A)` and `Fn(A, A)`
/// would otherwise overlap. Every parameter shares the type `Arg`.
pub trait Curry<Args, R> {
    type Arg;

    const ARITY: usize;

    /// Calls the function with exactly [`Self::ARITY`] arguments.
    fn invoke(&self, args: Vec<Self::Arg>) -> R;
}

impl<F, R> Curry<(), R> for F
where
    F: Fn() -> R,
{
    type Arg = ();

    const ARITY: usize = 0;

    fn invoke(&self, _args: Vec<()>) -> R {
        (self)()
    }
}

macro_rules! impl_curry {
    ( $arity:literal => $( $arg:ident : $ty:ident ),+ ) => {
        impl<F, A, R> Curry<( $( $ty, )+ ), R> for F
        where
            F: Fn( $( $ty ),+ ) -> R,
        {
            type Arg = A;

            const ARITY: usize = $arity;

            fn invoke(&self, args: Vec<A>) -> R {
                let [ $( $arg ),+ ] = match <[A; $arity]>::try_from(args) {
                    Ok(args) => args,
                    Err(args) => unreachable!(
                        "expected {} arguments, got {}",
                        $arity,
                        args.len()
                    ),
                };
                (self)( $( $arg ),+ )
            }
        }
    };
}

impl_curry!(1 => a: A);
impl_curry!(2 => a: A, b: A);
impl_curry!(3 => a: A, b: A, c: A);
impl_curry!(4 => a: A, b: A, c: A, d: A);
impl_curry!(5 => a: A, b: A, c: A, d: A, e: A);
impl_curry!(6 => a: A, b: A, c: A, d: A, e: A, f: A);
impl_curry!(7 => a: A, b: A, c: A, d: A, e: A, f: A, g: A);
impl_curry!(8 => a: A, b: A, c: A, d: A, e: A, f: A, g: A, h: A);

/// Curries `function`, reading its arity from its type.
///
/// ```
/// use curry_engine::curry;
///
/// let get_sum = curry(|a: i32, b: i32, c: i32| a + b + c);
/// let partial = get_sum.call([1, 2]).more().unwrap();
/// assert_eq!(partial.call([3]).value(), Some(6));
/// ```
pub fn curry<F, Args, R>(function: F) -> Curried<F::Arg, R>
where
    F: Curry<Args, R> + 'static,
{
    Curried::with_arity(F::ARITY, move |args| function.invoke(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_sum(a: i64, b: i64, c: i64) -> i64 {
        a + b + c
    }

    #[test]
    fn fn_items_report_their_arity() {
        assert_eq!(curry(get_sum).arity(), 3);
        assert_eq!(curry(i64::max).arity(), 2);
        assert_eq!(curry(|| 7).arity(), 0);
    }

    #[test]
    fn arguments_arrive_in_order() {
        let digits = curry(|a: u32, b: u32, c: u32, d: u32| a * 1000 + b * 100 + c * 10 + d);
        let partial = digits.call([1]).more().unwrap();
        let partial = partial.call([2, 3]).more().unwrap();
        assert_eq!(partial.call([4]).value(), Some(1234));
    }

    #[test]
    fn widest_arity() {
        let eight = curry(|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
            [a, b, c, d, e, f, g, h]
        });
        assert_eq!(eight.arity(), 8);
        assert_eq!(
            eight.call(1..=8).value(),
            Some([1, 2, 3, 4, 5, 6, 7, 8])
        );
    }

    #[test]
    fn nullary_ignores_arguments() {
        let constant = curry(|| "done");
        assert_eq!(constant.call([(), ()]).value(), Some("done"));
    }
}
