use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that generates a columnar `*Series` companion struct for a
/// per-step sample record. All fields in the source struct must be `f64`.
///
/// The generated series struct has the same fields as `Vec<f64>` columns,
/// with `with_capacity`, `push`, `get`, `len` and `is_empty` methods.
/// A `field_names()` associated function is added to the record itself.
///
/// Use `#[sample(series_name = "Trajectory")]` to override the default
/// series struct name (`{StructName}Series`).
#[proc_macro_derive(Sample, attributes(sample))]
pub fn derive_sample(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let vis = &input.vis;

    let series_name =
        extract_series_name(&input).unwrap_or_else(|| format_ident!("{}Series", name));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Sample can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Sample can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Sample struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut field_idents = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return syn::Error::new_spanned(field, "Sample fields must be named")
                .to_compile_error()
                .into();
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "Sample derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        field_idents.push(ident);
    }

    let first_field = field_idents[0];
    let field_name_strs: Vec<String> = field_idents.iter().map(|f| f.to_string()).collect();
    let series_doc = format!("Columnar series of [`{}`] records, one entry per step.", name);

    let expanded = quote! {
        #[doc = #series_doc]
        #[derive(Debug, Clone, Default, PartialEq)]
        #vis struct #series_name {
            #(pub #field_idents: Vec<f64>,)*
        }

        impl #series_name {
            /// Pre-allocate every column for `n` records.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#field_idents: Vec::with_capacity(n),)*
                }
            }

            /// Append one record.
            pub fn push(&mut self, s: &#name) {
                #(self.#field_idents.push(s.#field_idents);)*
            }

            /// Reassemble the record stored at index `i`.
            pub fn get(&self, i: usize) -> Option<#name> {
                Some(#name {
                    #(#field_idents: *self.#field_idents.get(i)?,)*
                })
            }

            /// Number of records stored.
            pub fn len(&self) -> usize {
                self.#first_field.len()
            }

            /// Returns `true` if no records have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first_field.is_empty()
            }
        }

        impl #name {
            /// Column names of the generated series, in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }
        }
    };

    expanded.into()
}

fn extract_series_name(input: &DeriveInput) -> Option<proc_macro2::Ident> {
    for attr in &input.attrs {
        if !attr.path().is_ident("sample") {
            continue;
        }
        let nested = attr
            .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)
            .ok()?;
        for meta in nested {
            if let Meta::NameValue(nv) = meta {
                if nv.path.is_ident("series_name") {
                    if let syn::Expr::Lit(expr_lit) = &nv.value {
                        if let Lit::Str(lit_str) = &expr_lit.lit {
                            return Some(format_ident!("{}", lit_str.value()));
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident("f64"),
        _ => false,
    }
}
