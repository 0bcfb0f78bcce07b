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

use crate::utils::{parse_variant_value, strip_model_attrs};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_quote};

pub fn expand_model_enum(
    mut input: DeriveInput,
    type_name: Option<String>,
) -> syn::Result<TokenStream> {
    let ident = input.ident.clone();

    let Data::Enum(data_enum) = &mut input.data else {
        return Err(syn::Error::new_spanned(
            &ident,
            "model_enum can only be applied to enums",
        ));
    };

    let mut variant_idents = Vec::new();
    let mut values = Vec::new();

    for variant in data_enum.variants.iter_mut() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "model enum variants cannot carry data",
            ));
        }

        // The variant name is the wire value unless stated otherwise
        let value = parse_variant_value(&variant.attrs)?
            .unwrap_or_else(|| variant.ident.to_string());
        if values.contains(&value) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate enumeration value '{value}'"),
            ));
        }

        strip_model_attrs(&mut variant.attrs);
        variant.attrs.push(parse_quote!(#[serde(rename = #value)]));

        variant_idents.push(variant.ident.clone());
        values.push(value);
    }

    let type_name = type_name.unwrap_or_else(|| ident.to_string());
    input.attrs.push(parse_quote! {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
            schemars::JsonSchema
        )]
    });

    Ok(quote! {
        #input

        impl #ident {
            pub const TYPE_NAME: &'static str = #type_name;

            /// All constants in declaration order.
            pub fn values() -> &'static [Self] {
                &[#(Self::#variant_idents),*]
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#variant_idents => #values,)*
                }
            }

            /// Looks up the constant for the given wire value.
            pub fn from_value(value: &str) -> Result<Self, ::beanstalk_model::ModelError> {
                match value {
                    #(#values => Ok(Self::#variant_idents),)*
                    _ => Err(::beanstalk_model::ModelError::InvalidEnumValue {
                        type_name: Self::TYPE_NAME.to_string(),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for #ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for #ident {
            type Err = ::beanstalk_model::ModelError;

            fn from_str(value: &str) -> Result<Self, ::beanstalk_model::ModelError> {
                Self::from_value(value)
            }
        }

        impl TryFrom<&str> for #ident {
            type Error = ::beanstalk_model::ModelError;

            fn try_from(value: &str) -> Result<Self, ::beanstalk_model::ModelError> {
                Self::from_value(value)
            }
        }

        impl ::beanstalk_model::ModelField for #ident {
            fn fmt_field(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }

            fn hash_code(&self) -> i32 {
                ::beanstalk_model::model_object::string_hash_code(self.as_str())
            }
        }
    })
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////
