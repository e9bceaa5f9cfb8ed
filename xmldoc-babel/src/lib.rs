//! XML documentation comments to Markdown
//!
//!     This crate reads the XML documentation that compilers emit from `///` comments (the
//!     `<doc><members>...` files), builds a typed model of it and renders the text content as
//!     inline Markdown.
//!
//!     TLDR:
//!         - Parsing is done by roxmltree; the model is built from its nodes and never mutated.
//!         - Rendering is a visitor over the model; new outputs are new visitors, not new model code.
//!         - Markdown text is produced by comrak; we only build its AST.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # XmlDocError
//!     ├── xml.rs                  # roxmltree helpers, whitespace normalization
//!     ├── model
//!     │   ├── text.rs             # TextBlock and the inline text elements
//!     │   ├── references.rs       # <see>, <paramref>, <typeparamref>
//!     │   ├── list.rs             # <list>, <listheader>, <item>
//!     │   ├── member_id.rs        # "T:Namespace.Type" style ids
//!     │   ├── members.rs          # <doc>, <member> and their sections
//!     │   └── mod.rs              # TextElement
//!     ├── visitor.rs              # DocumentationVisitor and the walk_* functions
//!     └── markdown
//!         ├── span.rs             # Md*Span target model
//!         ├── convert.rs          # ConvertToSpanVisitor
//!         ├── resolver.rs         # LinkResolver, LinkMap
//!         └── serializer.rs       # spans -> CommonMark
//!
//!     This is a pure lib: no printing, no environment, no file access. Loading options from
//!     files is done by xmldoc-config.
//!
//! Whitespace
//!
//!     Documentation comments are indented like the code they sit in, and that indentation
//!     ends up in the XML. Each text container strips the indentation of its first text run
//!     from all of its lines (see [`xml::trim_text`]), so the model holds the text as the
//!     author wrote it. A container that opens with an element takes the whitespace in front of
//!     that element instead. Code blocks are dedented on their own.
//!
//! Markdown Conversion
//!
//!     Only inline text can be converted: lists, code blocks and declaration nodes need layout
//!     decisions (tables, headings, fences) that depend on the page being generated, so the
//!     converter refuses them by panicking. Callers render those parts themselves and use the
//!     converter for the text inside.
//!
//!     Code references are linked through a [`markdown::LinkResolver`]. Resolving ids for real
//!     needs the compiled program, which we do not have; [`markdown::LinkMap`] covers the
//!     common case of a known table plus an API browser base URL.
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod error;
pub mod markdown;
pub mod model;
pub mod visitor;
pub mod xml;

pub use error::XmlDocError;
pub use markdown::{
    convert_to_span, serialize_span, text_to_markdown, ConvertToSpanVisitor, LinkResolver,
    MarkdownOptions, MdCompositeSpan, MdSpan,
};
pub use model::{DocumentationFile, ParseOptions, SeePolicy, TextBlock, TextElement};
pub use visitor::{DocumentationVisitor, Visitable};
