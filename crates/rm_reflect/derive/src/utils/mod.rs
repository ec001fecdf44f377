use proc_macro2::TokenStream;

/// An empty token stream, used where an optional piece of code is absent.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
