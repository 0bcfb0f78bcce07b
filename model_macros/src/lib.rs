// Copyright (c) 2025 Elektrobit Automotive GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.
//
// SPDX-License-Identifier: Apache-2.0

use proc_macro::TokenStream;
use syn::{DeriveInput, LitStr, parse_macro_input};

mod utils;

mod model_enum;
mod model_object;

fn parse_type_name(attr: TokenStream) -> syn::Result<Option<String>> {
    let mut type_name = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            type_name = Some(meta.value()?.parse::<LitStr>()?.value());
            Ok(())
        } else {
            Err(meta.error("expected `name = \"...\"`"))
        }
    });
    syn::parse::Parser::parse(parser, attr)?;
    Ok(type_name)
}

/// Turns a struct whose fields are all `Option<T>` into a service model object.
///
/// Fields accept `#[model(...)]` options: `name = "..."` for the service field
/// name (defaults to the PascalCase field name), `mandatory`,
/// `length(min = .., max = ..)`, `range(min = .., max = ..)` and
/// `pattern = "..."`. The struct itself accepts `name = "..."` for the service
/// type name.
#[proc_macro_attribute]
pub fn model_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    let type_name = match parse_type_name(attr) {
        Ok(type_name) => type_name,
        Err(err) => return err.into_compile_error().into(),
    };
    let input = parse_macro_input!(item as DeriveInput);

    model_object::expand_model_object(input, type_name)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turns a fieldless enum into a string-backed service enumeration.
///
/// The wire value of a variant is its name unless given with
/// `#[model(value = "...")]`.
#[proc_macro_attribute]
pub fn model_enum(attr: TokenStream, item: TokenStream) -> TokenStream {
    let type_name = match parse_type_name(attr) {
        Ok(type_name) => type_name,
        Err(err) => return err.into_compile_error().into(),
    };
    let input = parse_macro_input!(item as DeriveInput);

    model_enum::expand_model_enum(input, type_name)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
