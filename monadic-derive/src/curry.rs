//! Expansion of the `curry!` macro.
//!
//! # Accepted Input
//!
//! 1. `curry!(|a, b| body)`: arity taken from the closure.
//! 2. `curry!(function_path, arity)`: arity given as an integer literal.
//!
//! # Expansion
//!
//! Arity `0` and `1` expand to the function itself. For arity `n >= 2` the
//! function is moved into an `Rc` and every argument but the last is stored in
//! an `Rc` as well, so each intermediate closure is `Fn` and can be applied
//! any number of times:
//!
//! ```text
//! {
//!     let __monadic_function = Rc::new(add);
//!     move |__monadic_argument_0| {
//!         let __monadic_function = Rc::clone(&__monadic_function);
//!         let __monadic_argument_0 = Rc::new(__monadic_argument_0);
//!         move |__monadic_argument_1| {
//!             __monadic_function(
//!                 Rc::unwrap_or_clone(Rc::clone(&__monadic_argument_0)),
//!                 __monadic_argument_1,
//!             )
//!         }
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Lit, Token};

/// Parsed macro input: the callable expression and how many arguments it takes.
struct CurryTarget {
    function: TokenStream2,
    arity: usize,
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_target(input.into()) {
        Ok(target) => expand(&target),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_target(input: TokenStream2) -> syn::Result<CurryTarget> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut expressions = expressions.into_iter();

    match (expressions.next(), expressions.next(), expressions.next()) {
        (Some(Expr::Closure(closure)), None, None) => Ok(CurryTarget {
            arity: closure.inputs.len(),
            function: quote! { #closure },
        }),
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! with a function path requires an arity: curry!(function_name, 2)",
        )),
        (Some(function @ (Expr::Path(_) | Expr::Closure(_))), Some(arity), None) => {
            Ok(CurryTarget {
                arity: parse_arity(&arity)?,
                function: quote! { #function },
            })
        }
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure, or a function path followed by its arity",
        )),
    }
}

fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal),
            ..
        }) => literal.base10_parse::<usize>(),
        other => Err(syn::Error::new(
            other.span(),
            "curry! expected an integer literal for the arity",
        )),
    }
}

fn expand(target: &CurryTarget) -> TokenStream2 {
    let function = &target.function;

    if target.arity < 2 {
        return quote! { { #function } };
    }

    let arguments: Vec<Ident> = (0..target.arity)
        .map(|index| format_ident!("__monadic_argument_{}", index))
        .collect();

    let (last, leading) = match arguments.split_last() {
        Some(split) => split,
        None => return quote! { { #function } },
    };

    let call = quote! {
        __monadic_function(
            #(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#leading)),)*
            #last
        )
    };

    let chain = nest_closures(&arguments, call);

    quote! {
        {
            let __monadic_function = ::std::rc::Rc::new(#function);
            #chain
        }
    }
}

/// Wraps `innermost` in one closure per argument, innermost first.
fn nest_closures(arguments: &[Ident], innermost: TokenStream2) -> TokenStream2 {
    let last_index = arguments.len().saturating_sub(1);

    arguments
        .iter()
        .enumerate()
        .rev()
        .fold(innermost, |body, (index, argument)| {
            if index == last_index {
                return quote! { move |#argument| { #body } };
            }

            let captured = &arguments[..index];
            quote! {
                move |#argument| {
                    let __monadic_function = ::std::rc::Rc::clone(&__monadic_function);
                    #(let #captured = ::std::rc::Rc::clone(&#captured);)*
                    let #argument = ::std::rc::Rc::new(#argument);
                    #body
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn closure_arity_is_read_from_parameters() {
        let target = parse_target(quote! { |a, b, c| a + b + c }).unwrap();
        assert_eq!(target.arity, 3);
    }

    #[rstest]
    #[case(quote! { add, 2 }, 2)]
    #[case(quote! { module::volume, 3 }, 3)]
    #[case(quote! { thunk, 0 }, 0)]
    fn path_with_arity_is_accepted(#[case] input: TokenStream2, #[case] expected: usize) {
        let target = parse_target(input).unwrap();
        assert_eq!(target.arity, expected);
    }

    #[rstest]
    #[case(quote! { add })]
    #[case(quote! { add, two })]
    #[case(quote! { 42 })]
    #[case(quote! {})]
    fn malformed_input_is_rejected(#[case] input: TokenStream2) {
        assert!(parse_target(input).is_err());
    }

    #[rstest]
    fn small_arity_expands_to_function_itself() {
        let target = parse_target(quote! { negate, 1 }).unwrap();
        let expanded = expand(&target).to_string();
        assert!(!expanded.contains("Rc"));
    }

    #[rstest]
    fn each_leading_argument_is_shared_through_rc() {
        let target = parse_target(quote! { add3, 3 }).unwrap();
        let expanded = expand(&target).to_string();
        assert_eq!(expanded.matches("unwrap_or_clone").count(), 2);
        assert!(expanded.contains("__monadic_argument_2"));
    }
}
