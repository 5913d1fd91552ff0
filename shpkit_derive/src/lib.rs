//! Procedural macros used across the shpkit crates.

mod args;

use crate::args::Args;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

/// Wraps the body of a function returning `anyhow::Result` and attaches a context message to
/// any error it returns.
///
/// ```ignore
/// #[context("Failed to read part {k} of polygon")]
/// fn read_part(reader: &mut dyn RecordReader, k: usize) -> Result<RingGeometry> { ... }
/// ```
///
/// Arguments are passed to `format!` and evaluated only when an error occurs. A leading `move,`
/// moves captured values into the wrapping closure.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let Args(move_token, format_args) = parse_macro_input!(args);
	let mut input = parse_macro_input!(input as syn::ItemFn);

	let body = &input.block;
	let return_type = &input.sig.output;
	let err = Ident::new("err", Span::mixed_site());

	if input.sig.asyncness.is_some() {
		return syn::Error::new_spanned(&input.sig.asyncness, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}
	if matches!(return_type, syn::ReturnType::Default) {
		return syn::Error::new_spanned(&input.sig, "function should return Result")
			.to_compile_error()
			.into();
	}

	let force_fn_once = Ident::new("force_fn_once", Span::mixed_site());
	let new_body = quote! {
		// Moving a non-`Copy` value into the closure tells borrowck to always treat the closure
		// as a `FnOnce`, preventing some borrowing errors.
		let #force_fn_once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#force_fn_once);
			#body
		})().map_err(|#err| #err.context(format!(#format_args)).into())
	};
	input.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(new_body), None)];

	input.into_token_stream().into()
}
