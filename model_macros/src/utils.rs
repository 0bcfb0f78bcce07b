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

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident};
use syn::{Attribute, GenericArgument, Ident, LitInt, LitStr, PathArguments, Type, TypePath};

pub const MODEL_ATTR: &str = "model";
const BUILDER_SUFFIX: &str = "Builder";

// Field types rendered and returned by value.
const COPY_TYPES: [&str; 6] = ["bool", "i32", "i64", "f64", "Timestamp", "DateTime"];
const INTEGER_TYPES: [&str; 2] = ["i32", "i64"];

/// How the generated accessors treat the inner type `T` of an `Option<T>` field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Copy { integer: bool },
    List(TypePath),
    Map(TypePath, TypePath),
    Nested,
}

/// Options collected from the `#[model(...)]` attributes of a field.
#[derive(Debug, Default, PartialEq)]
pub struct FieldOptions {
    pub name: Option<String>,
    pub mandatory: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub pattern: Option<String>,
}

impl FieldOptions {
    pub fn has_length(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }

    pub fn has_range(&self) -> bool {
        self.min_value.is_some() || self.max_value.is_some()
    }
}

pub fn get_doc_attrs(attrs: &[Attribute]) -> Vec<TokenStream> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .map(Attribute::to_token_stream)
        .collect()
}

pub fn strip_model_attrs(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(MODEL_ATTR));
}

pub fn parse_field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(MODEL_ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("mandatory") {
                options.mandatory = true;
                Ok(())
            } else if meta.path.is_ident("name") {
                options.name = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else if meta.path.is_ident("pattern") {
                options.pattern = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else if meta.path.is_ident("length") {
                meta.parse_nested_meta(|bound| {
                    let value = bound.value()?.parse::<LitInt>()?.base10_parse::<usize>()?;
                    if bound.path.is_ident("min") {
                        options.min_length = Some(value);
                    } else if bound.path.is_ident("max") {
                        options.max_length = Some(value);
                    } else {
                        return Err(bound.error("expected `min` or `max`"));
                    }
                    Ok(())
                })
            } else if meta.path.is_ident("range") {
                meta.parse_nested_meta(|bound| {
                    let value = bound.value()?.parse::<LitInt>()?.base10_parse::<i64>()?;
                    if bound.path.is_ident("min") {
                        options.min_value = Some(value);
                    } else if bound.path.is_ident("max") {
                        options.max_value = Some(value);
                    } else {
                        return Err(bound.error("expected `min` or `max`"));
                    }
                    Ok(())
                })
            } else {
                Err(meta.error("unsupported model field option"))
            }
        })?;
    }

    Ok(options)
}

/// Returns the wire value given by `#[model(value = "...")]` on an enum variant.
pub fn parse_variant_value(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut value = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(MODEL_ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("value") {
                value = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("unsupported model variant option"))
            }
        })?;
    }

    Ok(value)
}

pub fn snake_to_pascal_case(input: &str) -> String {
    input
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

pub fn to_builder_ident(ident: &Ident) -> Ident {
    format_ident!("{}{}", ident, BUILDER_SUFFIX)
}

pub fn last_ident(tp: &TypePath) -> Option<&Ident> {
    tp.path.segments.last().map(|segment| &segment.ident)
}

pub fn is_option_type_path(tp: &TypePath) -> bool {
    last_ident(tp).is_some_and(|ident| ident == "Option")
}

fn generic_type_args(tp: &TypePath) -> Vec<TypePath> {
    let Some(PathArguments::AngleBracketed(generic)) =
        tp.path.segments.last().map(|segment| &segment.arguments)
    else {
        return Vec::new();
    };

    generic
        .args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(Type::Path(inner)) => Some(inner.clone()),
            _ => None,
        })
        .collect()
}

/// Returns `T` for a field declared as `Option<T>`.
pub fn extract_option_inner(ty: &Type) -> syn::Result<TypePath> {
    if let Type::Path(tp) = ty
        && is_option_type_path(tp)
        && let [inner] = generic_type_args(tp).as_slice()
    {
        return Ok(inner.clone());
    }

    Err(syn::Error::new_spanned(
        ty,
        "model object fields must be declared as Option<T>",
    ))
}

pub fn classify_field_type(tp: &TypePath) -> syn::Result<FieldKind> {
    let Some(ident) = last_ident(tp) else {
        return Err(syn::Error::new_spanned(tp, "unsupported field type"));
    };
    let name = ident.to_string();

    if name == "String" {
        return Ok(FieldKind::Text);
    }
    if COPY_TYPES.contains(&name.as_str()) {
        return Ok(FieldKind::Copy {
            integer: INTEGER_TYPES.contains(&name.as_str()),
        });
    }

    match (name.as_str(), generic_type_args(tp).as_slice()) {
        ("Vec", [item]) => Ok(FieldKind::List(item.clone())),
        ("BTreeMap", [key, value]) => Ok(FieldKind::Map(key.clone(), value.clone())),
        ("Vec" | "BTreeMap" | "HashMap" | "Option" | "Box", _) => Err(syn::Error::new_spanned(
            tp,
            "unsupported container type in a model object field",
        )),
        _ => Ok(FieldKind::Nested),
    }
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////
