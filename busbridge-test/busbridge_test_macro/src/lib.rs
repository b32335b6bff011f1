/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Runs an `async fn` test on a fresh multi-thread tokio runtime.
///
/// The test body may return `()` or any `Result<(), E>` with `E: Debug`; an
/// `Err` fails the test with the error's debug output.
#[proc_macro_attribute]
pub fn busbridge_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;
    let attrs = &input.attrs;
    let name = &sig.ident;
    let output = &sig.output;

    if sig.asyncness.is_none() {
        return syn::Error::new_spanned(sig.fn_token, "#[busbridge_test] requires an async fn")
            .to_compile_error()
            .into();
    }

    let async_name = syn::Ident::new(&format!("__{name}_async"), name.span());

    let expanded = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() {
            use ::busbridge_test::__private::{tokio, tracing, TestOutcome};

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to build the test runtime");

            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                runtime.block_on(async {
                    let test_span = tracing::info_span!("busbridge_test", name = stringify!(#name));
                    let _enter = test_span.enter();
                    #async_name().await
                })
            }));
            drop(runtime);

            match outcome {
                Ok(result) => TestOutcome::check(result, stringify!(#name)),
                Err(payload) => {
                    tracing::error!(test = stringify!(#name), "test panicked");
                    std::panic::resume_unwind(payload)
                }
            }
        }

        async fn #async_name() #output #body
    };

    expanded.into()
}
