use unsynn::*;

// Attributes, visibility and signature: everything up to the body.
unsynn! {
    struct Header {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        header: Header,
        body: BraceGroup,
    }
}

impl quote::ToTokens for Header {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// Runs `show_testhelpers::setup()` before the test body, so the test's
/// `tracing` output is visible.
///
/// ```ignore
/// use show_testhelpers::test;
///
/// #[test]
/// fn renders() {
///     assert_eq!(show_value::render(&1.into()), "1");
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    if !attr.is_empty() {
        return quote::quote! {
            ::core::compile_error!("#[show_testhelpers::test] takes no arguments");
        }
        .into();
    }

    let item = TokenStream::from(item);
    let TestFn { header, body, .. } = match item.to_token_iter().parse::<TestFn>() {
        Ok(test_fn) => test_fn,
        Err(_) => {
            return quote::quote! {
                ::core::compile_error!("#[show_testhelpers::test] expects a function");
            }
            .into();
        }
    };
    let body = body.0.stream();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #header {
            ::show_testhelpers::setup();
            #body
        }
    }
    .into()
}
