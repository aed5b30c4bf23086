use super::*;

//      _       _             _
//     / \   __| | __ _ _ __ | |_ ___ _ __
//    / _ \ / _` |/ _` | '_ \| __/ _ \ '__|
//   / ___ \ (_| | (_| | |_) | ||  __/ |
//  /_/   \_\__,_|\__,_| .__/ \__\___|_|
//                     |_|


/// Converts a synchronous callable into continuation-passing style: the
/// produced wrapper takes the original arguments plus a trailing
/// error-first continuation.
///
/// ```
/// use continuate::cps::{adapt, Fault};
///
/// fn divide(a: i32, b: i32) -> i32 {
///     if b == 0 {
///         panic!("b is 0");
///     }
///     a / b
/// }
///
/// adapt(divide).call((4, 2), |err: Option<Fault>, res: Option<i32>| {
///     assert!(err.is_none());
///     assert_eq!(res, Some(2));
/// });
/// ```
///
/// Leaving the trailing continuation out is a violation of the calling
/// convention and is rejected at compile time:
///
/// ```compile_fail
/// use continuate::cps::adapt;
///
/// fn answer() -> i32 { 42 }
///
/// adapt(answer).call(());
/// ```
pub fn adapt<F>(f: F) -> Adapted<F> {
    Adapted { f }
}

/// A synchronous callable adapted to continuation-passing style. The
/// wrapped callable is held for the wrapper's lifetime and never mutated,
/// so one `Adapted` may serve any number of callers.
pub struct Adapted<F> {
    f: F,
}

impl<F> Adapted<F> {
    /// Invokes the wrapped callable with exactly the supplied arguments and
    /// delivers the outcome through `k`. The continuation fires exactly
    /// once, on this call stack, before `call` returns.
    pub fn call<A, K>(&self, args: A, k: K)
        where F: Callable<A>, K: Continuation<F::Output>
    {
        deliver(move || self.f.invoke(args), k);
    }

    /// Single-sequence form of `call`: the final element of `invocation` is
    /// the continuation, everything before it the arguments.
    pub fn apply<I>(&self, invocation: I)
        where
            I: Invocation,
            F: Callable<I::Args>,
            I::Cont: Continuation<F::Output>,
    {
        let (args, k) = invocation.split();
        self.call(args, k);
    }

    /// Invokes a callable that reports failure through `Result`: `Ok` fills
    /// the value slot, `Err` the error slot. A panic is still captured, as
    /// in `call`.
    pub fn try_call<A, V, E, K>(&self, args: A, k: K)
        where
            F: Callable<A, Output = Result<V, E>>,
            E: error::Error + Send + Sync + 'static,
            K: Continuation<V>,
    {
        match panic::catch_unwind(panic::AssertUnwindSafe(move || self.f.invoke(args))) {
            Ok(Ok(value)) => k.resolve(value),
            Ok(Err(err)) => k.reject(Fault::failed(err)),
            Err(payload) => k.reject(Fault::Panicked(payload)),
        }
    }
}
