//! Procedural macros used by the `contrast` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a three component color model.
///
/// The input is a struct with exactly three named `Component` fields. Every
/// generic type parameter is treated as a tag and gets a `PhantomData` field.
/// The macro adds the common derives, a `new` constructor, `to_components` and
/// a `From<Components>` conversion.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 named fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Components are always accessible.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    let mut phantom_fields: Vec<syn::Ident> = vec![];
    let mut tags: Vec<syn::Ident> = vec![];

    for param in input.generics.params.iter() {
        match param {
            syn::GenericParam::Type(type_param) => tags.push(type_param.ident.clone()),
            other => {
                return syn::Error::new_spanned(other, "only type parameters can tag a model")
                    .to_compile_error()
                    .into();
            }
        }
    }

    if let syn::Fields::Named(ref mut named) = input.fields {
        for tag in tags.iter() {
            let field_name = format!("_{}", tag.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            match syn::Field::parse_named.parse2(quote! {
                #field_name: ::std::marker::PhantomData<#tag>
            }) {
                Ok(field) => named.named.push(field),
                Err(err) => return err.to_compile_error().into(),
            }
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let model_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new model from its three components.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: ::std::marker::PhantomData,)*
                }
            }

            /// Return the three components of this model in declaration order.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
