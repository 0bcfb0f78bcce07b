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

use crate::utils::{
    FieldKind, FieldOptions, classify_field_type, extract_option_inner, get_doc_attrs,
    parse_field_options, snake_to_pascal_case, strip_model_attrs, to_builder_ident,
};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Ident, Type, TypePath, ext::IdentExt, parse_quote};

struct DeclaredField {
    ident: Ident,
    ty: Type,
    inner: TypePath,
    kind: FieldKind,
    name: String,
    options: FieldOptions,
    docs: Vec<TokenStream>,
}

impl DeclaredField {
    fn from_field(field: &Field) -> syn::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(
                field,
                "model objects support named fields only",
            ));
        };

        let inner = extract_option_inner(&field.ty)?;
        let kind = classify_field_type(&inner)?;
        let options = parse_field_options(&field.attrs)?;
        let name = options
            .name
            .clone()
            .unwrap_or_else(|| snake_to_pascal_case(&ident.unraw().to_string()));

        let declared = DeclaredField {
            ident,
            ty: field.ty.clone(),
            inner,
            kind,
            name,
            options,
            docs: get_doc_attrs(&field.attrs),
        };
        declared.check_options()?;
        Ok(declared)
    }

    fn check_options(&self) -> syn::Result<()> {
        let options = &self.options;
        if options.has_length() && !matches!(self.kind, FieldKind::Text | FieldKind::List(_)) {
            return Err(syn::Error::new_spanned(
                &self.ident,
                "`length` applies to text and list fields only",
            ));
        }
        if options.has_range() && !matches!(self.kind, FieldKind::Copy { integer: true }) {
            return Err(syn::Error::new_spanned(
                &self.ident,
                "`range` applies to integer fields only",
            ));
        }
        if options.pattern.is_some() && self.kind != FieldKind::Text {
            return Err(syn::Error::new_spanned(
                &self.ident,
                "`pattern` applies to text fields only",
            ));
        }
        Ok(())
    }

    fn serde_attrs(&self) -> Vec<syn::Attribute> {
        let name = &self.name;
        let mut attrs: Vec<syn::Attribute> = vec![parse_quote! {
            #[serde(rename = #name, default, skip_serializing_if = "Option::is_none")]
        }];

        let options = &self.options;
        if options.has_length() {
            let bounds = schema_bounds(
                options.min_length.map(Literal::usize_unsuffixed),
                options.max_length.map(Literal::usize_unsuffixed),
            );
            attrs.push(parse_quote!(#[schemars(length(#bounds))]));
        }
        if options.has_range() {
            let bounds = schema_bounds(
                options.min_value.map(Literal::i64_unsuffixed),
                options.max_value.map(Literal::i64_unsuffixed),
            );
            attrs.push(parse_quote!(#[schemars(range(#bounds))]));
        }
        attrs
    }

    fn getter_signature(&self) -> (TokenStream, TokenStream) {
        let ident = &self.ident;
        let inner = &self.inner;
        match &self.kind {
            FieldKind::Text => (quote!(Option<&str>), quote!(self.#ident.as_deref())),
            FieldKind::List(item) => (quote!(Option<&[#item]>), quote!(self.#ident.as_deref())),
            FieldKind::Copy { .. } => (quote!(Option<#inner>), quote!(self.#ident)),
            FieldKind::Map(..) | FieldKind::Nested => {
                (quote!(Option<&#inner>), quote!(self.#ident.as_ref()))
            }
        }
    }

    fn value_getter(&self) -> TokenStream {
        let ident = &self.ident;
        let docs = &self.docs;
        let (ret, expr) = self.getter_signature();
        quote! {
            #(#docs)*
            pub fn #ident(&self) -> #ret {
                #expr
            }
        }
    }

    fn builder_getter(&self) -> TokenStream {
        let ident = &self.ident;
        let (ret, _) = self.getter_signature();
        quote! {
            pub fn #ident(&self) -> #ret {
                self.value.#ident()
            }
        }
    }

    fn builder_setters(&self) -> TokenStream {
        let ident = &self.ident;
        let ty = &self.ty;
        let inner = &self.inner;
        let plain = ident.unraw();
        let set_ident = format_ident!("set_{}", plain);
        let with_ident = format_ident!("with_{}", plain);

        let collection_setter = match &self.kind {
            FieldKind::List(item) => {
                let append_ident = format_ident!("append_{}", plain);
                quote! {
                    /// Appends to the list, starting a new one when it is unset.
                    pub fn #append_ident<I>(mut self, items: I) -> Self
                    where
                        I: IntoIterator<Item = #item>,
                    {
                        self.value.#ident.get_or_insert_with(Vec::new).extend(items);
                        self
                    }
                }
            }
            FieldKind::Map(key, value) => {
                let insert_ident = format_ident!("insert_{}", plain);
                quote! {
                    pub fn #insert_ident(mut self, key: impl Into<#key>, value: impl Into<#value>) -> Self {
                        self.value
                            .#ident
                            .get_or_insert_with(Default::default)
                            .insert(key.into(), value.into());
                        self
                    }
                }
            }
            _ => TokenStream::new(),
        };

        quote! {
            pub fn #set_ident(&mut self, value: #ty) -> &mut Self {
                self.value.#ident = value;
                self
            }

            pub fn #with_ident(mut self, value: impl Into<#inner>) -> Self {
                self.value.#ident = Some(value.into());
                self
            }

            #collection_setter
        }
    }

    fn validation(&self) -> TokenStream {
        let ident = &self.ident;
        let name = &self.name;
        let options = &self.options;

        let length_check = options.has_length().then(|| {
            let min = optional_literal(options.min_length.map(Literal::usize_suffixed));
            let max = optional_literal(options.max_length.map(Literal::usize_suffixed));
            quote! {
                ::beanstalk_model::validation::check_length(&field_path, value, #min, #max)?;
            }
        });
        let range_check = options.has_range().then(|| {
            let min = optional_literal(options.min_value.map(Literal::i64_suffixed));
            let max = optional_literal(options.max_value.map(Literal::i64_suffixed));
            quote! {
                ::beanstalk_model::validation::check_range(&field_path, i64::from(*value), #min, #max)?;
            }
        });
        let pattern_check = options.pattern.as_ref().map(|pattern| {
            quote! {
                static PATTERN: ::beanstalk_model::validation::Pattern =
                    ::beanstalk_model::validation::Pattern::new(#pattern);
                ::beanstalk_model::validation::check_pattern(&field_path, value, &PATTERN)?;
            }
        });

        let missing = if options.mandatory {
            quote! {
                return Err(::beanstalk_model::ModelError::MissingField {
                    field: ::beanstalk_model::validation::field_path(path, #name),
                });
            }
        } else {
            TokenStream::new()
        };

        quote! {
            match &self.#ident {
                Some(value) => {
                    let field_path = ::beanstalk_model::validation::field_path(path, #name);
                    #length_check
                    #range_check
                    #pattern_check
                    ::beanstalk_model::ModelField::validate_at(value, &field_path)?;
                }
                None => {
                    #missing
                }
            }
        }
    }
}

fn optional_literal(literal: Option<Literal>) -> TokenStream {
    match literal {
        Some(literal) => quote!(Some(#literal)),
        None => quote!(None),
    }
}

fn schema_bounds(min: Option<Literal>, max: Option<Literal>) -> TokenStream {
    match (min, max) {
        (Some(min), Some(max)) => quote!(min = #min, max = #max),
        (Some(min), None) => quote!(min = #min),
        (None, Some(max)) => quote!(max = #max),
        (None, None) => TokenStream::new(),
    }
}

pub fn expand_model_object(
    mut input: DeriveInput,
    type_name: Option<String>,
) -> syn::Result<TokenStream> {
    let ident = input.ident.clone();
    let vis = input.vis.clone();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "model objects cannot be generic",
        ));
    }

    let Data::Struct(data_struct) = &mut input.data else {
        return Err(syn::Error::new_spanned(
            &ident,
            "model_object can only be applied to structs",
        ));
    };
    let Fields::Named(fields_named) = &mut data_struct.fields else {
        return Err(syn::Error::new_spanned(
            &ident,
            "model_object requires a struct with named fields",
        ));
    };

    let mut fields = Vec::new();
    for field in fields_named.named.iter_mut() {
        let declared = DeclaredField::from_field(field)?;
        strip_model_attrs(&mut field.attrs);
        field.attrs.extend(declared.serde_attrs());
        fields.push(declared);
    }

    let type_name = type_name.unwrap_or_else(|| ident.to_string());
    input.attrs.push(parse_quote! {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            serde::Serialize,
            serde::Deserialize,
            schemars::JsonSchema
        )]
    });
    input.attrs.push(parse_quote!(#[serde(rename = #type_name)]));

    let builder_ident = to_builder_ident(&ident);
    let builder_doc = format!("Builder for [`{ident}`].");

    let value_getters = fields.iter().map(DeclaredField::value_getter);
    let builder_getters = fields.iter().map(DeclaredField::builder_getter);
    let builder_setters = fields.iter().map(DeclaredField::builder_setters);
    let validations = fields.iter().map(DeclaredField::validation);
    let field_idents = fields.iter().map(|field| &field.ident).collect::<Vec<_>>();
    let field_names = fields.iter().map(|field| &field.name);

    Ok(quote! {
        #input

        impl #ident {
            #(#value_getters)*

            pub fn builder() -> #builder_ident {
                #builder_ident::default()
            }

            /// Returns a builder pre-filled with the values of `self`.
            pub fn to_builder(&self) -> #builder_ident {
                #builder_ident {
                    value: self.clone(),
                }
            }

            /// Checks the documented constraints of this object and all nested objects.
            pub fn validate(&self) -> Result<(), ::beanstalk_model::ModelError> {
                ::beanstalk_model::ModelField::validate_at(self, #type_name)
            }
        }

        #[doc = #builder_doc]
        #[derive(Debug, Clone, Default, PartialEq)]
        #vis struct #builder_ident {
            value: #ident,
        }

        impl #builder_ident {
            #(#builder_getters)*

            #(#builder_setters)*

            pub fn build(self) -> Result<#ident, ::beanstalk_model::ModelError> {
                ::beanstalk_model::model_object::validated(self.value)
            }
        }

        impl std::fmt::Display for #ident {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut fields = ::beanstalk_model::model_object::FieldRenderer::new(f)?;
                #(fields.field(#field_names, &self.#field_idents)?;)*
                fields.finish()
            }
        }

        impl ::beanstalk_model::ModelField for #ident {
            fn fmt_field(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }

            #[allow(unused_mut)]
            fn hash_code(&self) -> i32 {
                let mut hash: i32 = 1;
                #(hash = ::beanstalk_model::model_object::combine_hash(hash, &self.#field_idents);)*
                hash
            }

            #[allow(unused_variables)]
            fn validate_at(&self, path: &str) -> Result<(), ::beanstalk_model::ModelError> {
                #(#validations)*
                Ok(())
            }
        }

        impl std::hash::Hash for #ident {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32(::beanstalk_model::ModelField::hash_code(self));
            }
        }

        impl ::beanstalk_model::ModelObject for #ident {
            const TYPE_NAME: &'static str = #type_name;
            type Builder = #builder_ident;

            fn builder() -> Self::Builder {
                #builder_ident::default()
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

#[cfg(test)]
mod tests {
    use super::expand_model_object;
    use syn::{DeriveInput, parse_quote};

    #[test]
    fn test_expand_model_object_generates_builder_and_accessors() {
        let input: DeriveInput = parse_quote! {
            pub struct CheckDnsAvailabilityRequest {
                #[model(mandatory, name = "CNAMEPrefix", length(min = 4, max = 63))]
                cname_prefix: Option<String>,
            }
        };

        let expanded = expand_model_object(input, Some("CheckDNSAvailabilityRequest".into()))
            .unwrap()
            .to_string();

        assert!(expanded.contains("pub struct CheckDnsAvailabilityRequestBuilder"));
        assert!(expanded.contains("fn with_cname_prefix"));
        assert!(expanded.contains("fn set_cname_prefix"));
        assert!(expanded.contains("\"CNAMEPrefix\""));
        assert!(expanded.contains("\"CheckDNSAvailabilityRequest\""));
        assert!(expanded.contains("MissingField"));
        assert!(!expanded.contains("# [model"));
    }

    #[test]
    fn test_expand_model_object_list_and_map_helpers() {
        let input: DeriveInput = parse_quote! {
            pub struct Holder {
                tags: Option<Vec<Tag>>,
                settings: Option<BTreeMap<String, String>>,
                r#type: Option<String>,
            }
        };

        let expanded = expand_model_object(input, None).unwrap().to_string();

        assert!(expanded.contains("fn append_tags"));
        assert!(expanded.contains("fn insert_settings"));
        assert!(expanded.contains("fn with_type"));
        assert!(expanded.contains("\"Type\""));
    }

    #[test]
    fn test_expand_model_object_pattern_is_compiled_once_per_field() {
        let input: DeriveInput = parse_quote! {
            pub struct CheckDnsAvailabilityRequest {
                #[model(mandatory, length(min = 4, max = 63), pattern = "^[a-z0-9-]+$")]
                cname_prefix: Option<String>,
            }
        };

        let expanded = expand_model_object(input, None).unwrap().to_string();

        assert!(expanded.contains("static PATTERN"));
        assert!(expanded.contains("\"^[a-z0-9-]+$\""));
        assert!(expanded.contains("& PATTERN"));
    }

    #[test]
    fn test_expand_model_object_rejects_non_option_field() {
        let input: DeriveInput = parse_quote! {
            pub struct Broken {
                name: String,
            }
        };

        assert!(expand_model_object(input, None).is_err());
    }

    #[test]
    fn test_expand_model_object_rejects_misplaced_constraints() {
        let range_on_text: DeriveInput = parse_quote! {
            pub struct Broken {
                #[model(range(min = 1))]
                name: Option<String>,
            }
        };
        assert!(expand_model_object(range_on_text, None).is_err());

        let pattern_on_list: DeriveInput = parse_quote! {
            pub struct Broken {
                #[model(pattern = "^a$")]
                names: Option<Vec<String>>,
            }
        };
        assert!(expand_model_object(pattern_on_list, None).is_err());
    }

    #[test]
    fn test_expand_model_object_rejects_enums() {
        let input: DeriveInput = parse_quote! {
            pub enum NotAStruct {
                A,
            }
        };

        assert!(expand_model_object(input, None).is_err());
    }
}
