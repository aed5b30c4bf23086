use super::*;

//   ____            _   _                   _
//  / ___|___  _ __ | |_(_)_ __  _   _  __ _| |_ ___
// | |   / _ \| '_ \| __| | '_ \| | | |/ _` | __/ _ \
// | |__| (_) | | | | |_| | | | | |_| | (_| | ||  __/
//  \____\___/|_| |_|\__|_|_| |_|\__,_|\__,_|\__\___|


/// The object form of the adapter: wraps one synchronous callable behind
/// `bind`/`call`/`apply`, with an explicit execution context and partial
/// application of leading arguments.
///
/// A deferred call produced by `bind` must still end with a continuation;
/// leaving it out does not compile:
///
/// ```compile_fail
/// use continuate::cps::Continuate;
///
/// fn divide(a: i32, b: i32) -> i32 { a / b }
///
/// Continuate::new(divide).bind((), (4,)).call((2,));
/// ```
pub struct Continuate<F> {
    f: F,
}

impl<F> Continuate<F> {
    /// Wraps a callable. It is held for the wrapper's lifetime and never
    /// mutated.
    pub fn new(f: F) -> Self {
        Continuate { f }
    }

    /// Pre-binds an execution context and a prefix of arguments. Pure
    /// composition: nothing runs until the returned deferred call is
    /// invoked.
    pub fn bind<Cx, P>(&self, context: Cx, prefix: P) -> Bound<F, Cx, P> {
        Bound { f: &self.f, context, prefix }
    }

    /// Invokes the wrapped callable against `context` with `args`,
    /// delivering the outcome through `k` under the same error-first
    /// contract as `Adapted::call`. Observably identical to `bind`
    /// followed by an immediate invocation with no further arguments.
    pub fn call<Cx, A, K, M>(&self, context: Cx, args: A, k: K)
        where F: ContextCallable<Cx, A, M>, K: Continuation<F::Output>
    {
        deliver(move || self.f.invoke_with(&context, args), k);
    }

    /// As `call`, with the arguments and the continuation supplied as one
    /// ordered sequence, continuation last.
    pub fn apply<Cx, I, M>(&self, context: Cx, invocation: I)
        where
            I: Invocation,
            F: ContextCallable<Cx, I::Args, M>,
            I::Cont: Continuation<F::Output>,
    {
        let (args, k) = invocation.split();
        self.call(context, args, k);
    }
}

/// A deferred call: the wrapped callable together with the execution
/// context it will run against and the argument prefix applied so far.
/// Context and prefix are captured at bind time and never mutated.
///
/// `bind` extends the prefix by functional update and leaves `self`
/// untouched, so sibling binds derived from one `Bound` never alias.
/// `call` and `apply` take `&self` and clone the prefix per invocation, so
/// one `Bound` may be invoked any number of times, concurrently included.
pub struct Bound<'f, F: 'f, Cx, P> {
    f: &'f F,
    context: Cx,
    prefix: P,
}

impl<'f, F, Cx, P> Bound<'f, F, Cx, P> {
    /// Extends the argument prefix, producing a new deferred call over
    /// `prefix ++ more` against a clone of the same context.
    pub fn bind<Q>(&self, more: Q) -> Bound<'f, F, Cx, <P as Concat<Q>>::Output>
        where Cx: Clone, P: Clone + Concat<Q>
    {
        Bound {
            f: self.f,
            context: self.context.clone(),
            prefix: self.prefix.clone().concat(more),
        }
    }

    /// Invokes the wrapped callable against the bound context with
    /// `prefix ++ suffix`, delivering the outcome through `k`.
    pub fn call<S, K, M>(&self, suffix: S, k: K)
        where
            P: Clone + Concat<S>,
            F: ContextCallable<Cx, <P as Concat<S>>::Output, M>,
            K: Continuation<F::Output>,
    {
        let args = self.prefix.clone().concat(suffix);
        deliver(move || self.f.invoke_with(&self.context, args), k);
    }

    /// As `call`, with the remaining arguments and the continuation in one
    /// ordered sequence, continuation last.
    pub fn apply<I, M>(&self, invocation: I)
        where
            I: Invocation,
            P: Clone + Concat<I::Args>,
            F: ContextCallable<Cx, <P as Concat<I::Args>>::Output, M>,
            I::Cont: Continuation<F::Output>,
    {
        let (suffix, k) = invocation.split();
        self.call(suffix, k);
    }
}
