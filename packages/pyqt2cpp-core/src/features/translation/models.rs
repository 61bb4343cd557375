//! C++ declaration models
//!
//! The translation output is a small tree of plain data: classes hold
//! signals, signals hold parameter types. Rendering is pure, so equal
//! models produce byte-identical header text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::shared::models::Span;

/// Python primitive names with a fixed C++ mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Bool,
    Int,
    Long,
    Float,
    Complex,
    Str,
    Unicode,
    Tuple,
    List,
    Dict,
}

impl Primitive {
    /// Look up a Python type name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(Self::Bool),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "complex" => Some(Self::Complex),
            "str" => Some(Self::Str),
            "unicode" => Some(Self::Unicode),
            "tuple" => Some(Self::Tuple),
            "list" => Some(Self::List),
            "dict" => Some(Self::Dict),
            _ => None,
        }
    }

    /// Name on the Python side
    pub fn python_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::Str => "str",
            Self::Unicode => "unicode",
            Self::Tuple => "tuple",
            Self::List => "list",
            Self::Dict => "dict",
        }
    }

    /// Rendered C++ type
    ///
    /// Container primitives carry no element types in the source idiom,
    /// so they all map to QVariant.
    pub fn cpp_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Complex => "std::complex<double>",
            Self::Str | Self::Unicode => "QString",
            Self::Tuple | Self::List | Self::Dict => "QVariant",
        }
    }
}

/// A resolved C++ type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CppType {
    /// Fixed-mapping primitive
    Primitive(Primitive),
    /// Registered Qt wrapper class, stored by terminal name
    QtClass(String),
    /// Scope path for everything else, already joined with `::`
    Scoped(String),
}

impl CppType {
    /// C++ spelling of the type
    pub fn to_cpp(&self) -> &str {
        match self {
            Self::Primitive(primitive) => primitive.cpp_name(),
            Self::QtClass(name) => name,
            Self::Scoped(path) => path,
        }
    }
}

/// One declared signal member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CppSignal {
    pub name: String,
    /// Parameter types, shared between the names bound by one statement
    pub params: Arc<[CppType]>,
    pub span: Span,
}

impl CppSignal {
    /// Render as a member function declaration
    pub fn to_declaration(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(|p| p.to_cpp()).collect();
        format!("void {}({});", self.name, params.join(", "))
    }
}

/// One translated class declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CppClass {
    pub name: String,
    pub span: Span,
    pub bases: Vec<CppType>,
    pub signals: Vec<CppSignal>,
    /// Slot members, reserved, not yet populated
    pub slots: Vec<CppSignal>,
    /// Data members, reserved, not yet populated
    pub members: Vec<(String, CppType)>,
}

impl CppClass {
    /// Render the class declaration as header text
    pub fn to_header(&self) -> String {
        format!(
            "class {0} {1}{{\npublic:\n    {0}();\n    ~{0}();\n\n{2}\n}};",
            self.name,
            self.bases_part(),
            self.body_part(),
        )
    }

    fn bases_part(&self) -> String {
        if self.bases.is_empty() {
            return String::new();
        }
        let bases: Vec<&str> = self.bases.iter().map(|b| b.to_cpp()).collect();
        format!(":\n    public {}\n", bases.join(",\n    public "))
    }

    fn body_part(&self) -> String {
        let mut sections = Vec::new();
        if !self.signals.is_empty() {
            sections.push(self.signals_section());
        }
        sections.join("\n")
    }

    fn signals_section(&self) -> String {
        let decls: Vec<String> = self.signals.iter().map(|s| s.to_declaration()).collect();
        format!("signals:\n    {}\n", decls.join("\n    "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signal(name: &str, params: Vec<CppType>) -> CppSignal {
        CppSignal {
            name: name.to_string(),
            params: params.into(),
            span: Span::zero(),
        }
    }

    #[test]
    fn test_primitive_cpp_names() {
        let cases = [
            (Primitive::Bool, "bool"),
            (Primitive::Int, "int"),
            (Primitive::Long, "long"),
            (Primitive::Float, "float"),
            (Primitive::Complex, "std::complex<double>"),
            (Primitive::Str, "QString"),
            (Primitive::Unicode, "QString"),
            (Primitive::Tuple, "QVariant"),
            (Primitive::List, "QVariant"),
            (Primitive::Dict, "QVariant"),
        ];
        for (primitive, expected) in cases {
            assert_eq!(primitive.cpp_name(), expected);
        }
    }

    #[test]
    fn test_primitive_round_trip_names() {
        let all = [
            Primitive::Bool,
            Primitive::Int,
            Primitive::Long,
            Primitive::Float,
            Primitive::Complex,
            Primitive::Str,
            Primitive::Unicode,
            Primitive::Tuple,
            Primitive::List,
            Primitive::Dict,
        ];
        for primitive in all {
            assert_eq!(Primitive::from_name(primitive.python_name()), Some(primitive));
        }
        assert_eq!(Primitive::from_name("bytes"), None);
        assert_eq!(Primitive::from_name("Int"), None);
    }

    #[test]
    fn test_cpp_type_rendering() {
        assert_eq!(CppType::Primitive(Primitive::Str).to_cpp(), "QString");
        assert_eq!(CppType::QtClass("QObject".to_string()).to_cpp(), "QObject");
        assert_eq!(
            CppType::Scoped("hoge::fuga".to_string()).to_cpp(),
            "hoge::fuga"
        );
    }

    #[test]
    fn test_signal_declaration() {
        let zero = signal("closed", vec![]);
        assert_eq!(zero.to_declaration(), "void closed();");

        let two = signal(
            "moved",
            vec![
                CppType::Primitive(Primitive::Int),
                CppType::Primitive(Primitive::Str),
            ],
        );
        assert_eq!(two.to_declaration(), "void moved(int, QString);");
    }

    #[test]
    fn test_empty_class_header() {
        let class = CppClass {
            name: "Test".to_string(),
            span: Span::zero(),
            bases: Vec::new(),
            signals: Vec::new(),
            slots: Vec::new(),
            members: Vec::new(),
        };

        assert_eq!(
            class.to_header(),
            "class Test {\npublic:\n    Test();\n    ~Test();\n\n\n};"
        );
    }

    #[test]
    fn test_full_class_header() {
        let class = CppClass {
            name: "Test".to_string(),
            span: Span::zero(),
            bases: vec![CppType::QtClass("QObject".to_string())],
            signals: vec![
                signal("signal", vec![CppType::Primitive(Primitive::Int)]),
                signal("test", vec![CppType::Primitive(Primitive::Str)]),
            ],
            slots: Vec::new(),
            members: Vec::new(),
        };

        let expected = "\
class Test :
    public QObject
{
public:
    Test();
    ~Test();

signals:
    void signal(int);
    void test(QString);

};";
        assert_eq!(class.to_header(), expected);
    }

    #[test]
    fn test_multiple_bases_header() {
        let class = CppClass {
            name: "Widget".to_string(),
            span: Span::zero(),
            bases: vec![
                CppType::QtClass("QObject".to_string()),
                CppType::Scoped("hoge::fuga".to_string()),
            ],
            signals: Vec::new(),
            slots: Vec::new(),
            members: Vec::new(),
        };

        let header = class.to_header();
        assert!(header.starts_with("class Widget :\n    public QObject,\n    public hoge::fuga\n{"));
    }
}
