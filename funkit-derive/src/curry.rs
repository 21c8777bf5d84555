//! Expansion of `curry!`.
//!
//! For `curry!(join, 3)` the generated code is:
//!
//! ```text
//! {
//!     let __funkit_function = Rc::new(join);
//!     move |__funkit_argument_0| {
//!         let __funkit_function = Rc::clone(&__funkit_function);
//!         let __funkit_argument_0 = Rc::new(__funkit_argument_0);
//!         move |__funkit_argument_1| {
//!             let __funkit_function = Rc::clone(&__funkit_function);
//!             let __funkit_argument_0 = Rc::clone(&__funkit_argument_0);
//!             let __funkit_argument_1 = Rc::new(__funkit_argument_1);
//!             move |__funkit_argument_2| __funkit_function(
//!                 Rc::unwrap_or_clone(Rc::clone(&__funkit_argument_0)),
//!                 Rc::unwrap_or_clone(Rc::clone(&__funkit_argument_1)),
//!                 __funkit_argument_2,
//!             )
//!         }
//!     }
//! }
//! ```

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, ExprPath, LitInt, Token};

const MINIMUM_ARITY: usize = 2;

/// What `curry!` was asked to curry.
enum CurryTarget {
    Closure(ExprClosure),
    Path { function: ExprPath, arity: usize },
}

impl CurryTarget {
    fn arity(&self) -> usize {
        match self {
            Self::Closure(closure) => closure.inputs.len(),
            Self::Path { arity, .. } => *arity,
        }
    }

    fn function_tokens(&self) -> TokenStream {
        match self {
            Self::Closure(closure) => quote! { #closure },
            Self::Path { function, .. } => quote! { #function },
        }
    }
}

impl Parse for CurryTarget {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expression: Expr = input.parse()?;
        let has_arity = input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty();

        if !has_arity {
            return match expression {
                Expr::Closure(closure) => Ok(Self::Closure(closure)),
                Expr::Path(path) => Err(syn::Error::new(
                    path.span(),
                    "curry! with a function path needs an arity: curry!(function, 2)",
                )),
                other => Err(syn::Error::new(
                    other.span(),
                    "curry! expects a closure or a function path followed by an arity",
                )),
            };
        }

        let Expr::Path(function) = expression else {
            return Err(syn::Error::new(
                expression.span(),
                "curry! expects a function path before the arity",
            ));
        };
        let arity_literal: LitInt = input.parse()?;
        let arity = arity_literal.base10_parse::<usize>()?;
        input.parse::<Option<Token![,]>>()?;

        Ok(Self::Path { function, arity })
    }
}

pub fn expand(input: TokenStream) -> TokenStream {
    match syn::parse2::<CurryTarget>(input).and_then(|target| generate(&target)) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    }
}

fn generate(target: &CurryTarget) -> syn::Result<TokenStream> {
    let arity = target.arity();
    if arity < MINIMUM_ARITY {
        return Err(syn::Error::new(
            Span::call_site(),
            format!("curry! needs a function of at least {MINIMUM_ARITY} arguments, found {arity}"),
        ));
    }

    let parameters: Vec<Ident> = (0..arity)
        .map(|index| format_ident!("__funkit_argument_{}", index))
        .collect();
    let function = target.function_tokens();
    let stages = stage(&parameters, 0);

    Ok(quote! {
        {
            let __funkit_function = ::std::rc::Rc::new(#function);
            #stages
        }
    })
}

/// Builds the closure taking `parameters[depth]` and everything nested in it.
fn stage(parameters: &[Ident], depth: usize) -> TokenStream {
    let parameter = &parameters[depth];
    let captured = &parameters[..depth];

    if depth + 1 == parameters.len() {
        return quote! {
            move |#parameter| __funkit_function(
                #(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#captured)),)*
                #parameter
            )
        };
    }

    let inner = stage(parameters, depth + 1);
    quote! {
        move |#parameter| {
            let __funkit_function = ::std::rc::Rc::clone(&__funkit_function);
            #(let #captured = ::std::rc::Rc::clone(&#captured);)*
            let #parameter = ::std::rc::Rc::new(#parameter);
            #inner
        }
    }
}
