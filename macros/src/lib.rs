use itertools::Itertools;
use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, FnArg, ItemFn, ReturnType, Signature, Type, WhereClause};

/// Curries an `fn` when used as an attribute.
///
/// The function is left as is. Next to it, a `<name>_curried()` function is
/// generated that returns a `curry_engine::Curried` whose arity is the number
/// of declared parameters. Every parameter must have the same type.
/// Supports generics and lifetimes.
#[proc_macro_attribute]
pub fn curry(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(TokenStream2::from(attr), NO_ATTRIBUTE_ARGUMENTS)
            .to_compile_error()
            .into();
    }

    let parsed = parse_macro_input!(item as ItemFn);
    match generate_curry(parsed) {
        Ok(gen) => gen,
        Err(err) => err.to_compile_error(),
    }
    .into()
}

fn generate_curry(parsed: ItemFn) -> syn::Result<TokenStream2> {
    let ItemFn {
        vis: visibility,
        sig:
            Signature {
                asyncness,
                variadic,
                generics,
                ident: fn_name,
                inputs,
                output,
                ..
            },
        ..
    } = &parsed;

    if let Some(asyncness) = asyncness {
        return Err(syn::Error::new_spanned(asyncness, NO_ASYNC));
    }
    if let Some(variadic) = variadic {
        return Err(syn::Error::new_spanned(variadic, NO_C_VARIADIC));
    }

    let argument_types = inputs
        .iter()
        .map(|argument| match argument {
            FnArg::Typed(typed_argument) => Ok(&*typed_argument.ty),
            FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(receiver, NO_SELF_RECEIVER)),
        })
        .collect::<syn::Result<Vec<&Type>>>()?;

    let argument_type = *argument_types
        .first()
        .ok_or_else(|| syn::Error::new_spanned(&parsed.sig, MUST_HAVE_ARGUMENT))?;

    if let Type::ImplTrait(_) = argument_type {
        return Err(syn::Error::new_spanned(argument_type, NO_IMPL_TRAIT));
    }

    // The accumulated arguments travel in one `Vec`, so they must share a type
    if let Some((_, mismatched)) = argument_types
        .iter()
        .tuple_windows()
        .find(|(left, right)| left != right)
    {
        return Err(syn::Error::new_spanned(mismatched, MIXED_ARGUMENT_TYPES));
    }

    let return_type = match output {
        ReturnType::Default => quote!(()),
        ReturnType::Type(_, return_type) => quote!(#return_type),
    };

    let mut where_clause: WhereClause = match &generics.where_clause {
        Some(where_clause) => where_clause.clone(),
        None => parse_quote!(where),
    };
    where_clause
        .predicates
        .push(parse_quote!(#argument_type: ::core::clone::Clone + 'static));
    where_clause.predicates.push(parse_quote!(#return_type: 'static));

    // Late-bound lifetimes cannot be named in a turbofish, leave those to inference
    let (impl_generics, ty_generics, _) = generics.split_for_impl();
    let turbofish = if generics.params.is_empty() || generics.lifetimes().next().is_some() {
        quote!()
    } else {
        let turbofish = ty_generics.as_turbofish();
        quote!(#turbofish)
    };

    let curried_name = format_ident!("{}_curried", fn_name);
    let doc = format!(" Curried form of [`{fn_name}`].");
    let arity = Literal::usize_unsuffixed(argument_types.len());
    let arguments = (0..argument_types.len())
        .map(|index| format_ident!("__arg{}", index))
        .collect_vec();

    Ok(quote! {
        #parsed

        #[doc = #doc]
        #visibility fn #curried_name #impl_generics () -> ::curry_engine::Curried<#argument_type, #return_type>
        #where_clause
        {
            ::curry_engine::Curried::with_arity(#arity, |__args: ::std::vec::Vec<#argument_type>| {
                let [#(#arguments),*] = match <[#argument_type; #arity] as ::core::convert::TryFrom<_>>::try_from(__args) {
                    ::core::result::Result::Ok(arguments) => arguments,
                    ::core::result::Result::Err(_) => ::core::unreachable!(#ARITY_INVARIANT),
                };
                #fn_name #turbofish (#(#arguments),*)
            })
        }
    })
}

const NO_ATTRIBUTE_ARGUMENTS: &str = "`curry` does not take any arguments";
const NO_ASYNC: &str = "Cannot curry an `async` function";
const NO_C_VARIADIC: &str = "Cannot curry a C-variadic function";
const NO_SELF_RECEIVER: &str = "Cannot curry a method, `self` receivers are not supported";
const MUST_HAVE_ARGUMENT: &str = "Must have atleast one argument to curry";
const NO_IMPL_TRAIT: &str = "Cannot curry over `impl Trait` arguments";
const MIXED_ARGUMENT_TYPES: &str = "All arguments of a curried function must have the same type";
const ARITY_INVARIANT: &str = "curried function received the wrong number of arguments";
