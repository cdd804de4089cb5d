use proc_macro::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Fields, FieldsNamed, Type};

/// Derive macro implementing `Cube` for structs with a `center` and a `size` field.
///
/// The type of `center` becomes `Cube::Vector` and the type of `size` becomes `Cube::Scalar`.
/// Both fields are returned by copy.
#[proc_macro_derive(Cube)]
pub fn cube_derive(input: TokenStream) -> TokenStream {
    syn::parse(input)
        .and_then(expand)
        .unwrap_or_else(|e| e.to_compile_error().into())
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let fields = named_fields(&input)?;
    let vector = field_type(fields, "center", "the center of the cube")?;
    let scalar = field_type(fields, "size", "the edge length of the cube")?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics Cube for #name #ty_generics #where_clause {
            type Scalar = #scalar;

            type Vector = #vector;

            #[inline]
            fn center(&self) -> Self::Vector {
                self.center
            }

            #[inline]
            fn size(&self) -> Self::Scalar {
                self.size
            }
        }
    }
    .into())
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            fields => Err(syn::Error::new(
                fields.span(),
                "`#[derive(Cube)]` needs a struct with named `center` and `size` fields",
            )),
        },
        Data::Enum(data) => Err(syn::Error::new_spanned(
            data.enum_token,
            "`#[derive(Cube)]` is only supported on structs, not enums",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "`#[derive(Cube)]` is only supported on structs, not unions",
        )),
    }
}

fn field_type<'a>(fields: &'a FieldsNamed, name: &str, role: &str) -> syn::Result<&'a Type> {
    fields
        .named
        .iter()
        .find(|field| field.ident.as_ref().map_or(false, |ident| ident == name))
        .map(|field| &field.ty)
        .ok_or_else(|| {
            syn::Error::new_spanned(
                fields,
                format!("`#[derive(Cube)]` needs a `{name}` field holding {role}"),
            )
        })
}
