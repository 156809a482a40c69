//! Generated definitions shared by the integration tests.
//!
//! `Entry`, `Type`, `Interface`, `Enum` and `Tuple` mirror the minimal
//! structures schema; the rest exercise populated fields.

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use schema_codec::codec::{Bytes, Mapping};
use schema_codec::enumeration::Enumeration;
use schema_codec::polymorphic::{self, Variant};
use schema_codec::record::{FieldReader, FieldWriter, Record};
use schema_codec::tuple::{self, ElementReader, ElementWriter};
use schema_codec::{interface_codec, record_codec, repr_enum_codec, tuple_codec, Result};

// ---------------------------------------------------------------------------
// Minimal structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Entry;

impl Record for Entry {
    const NAME: &'static str = "Entry";
    const FIELDS: &'static [&'static str] = &[];

    fn encode_fields(&self, _out: &mut FieldWriter) -> Result<()> {
        Ok(())
    }

    fn decode_fields(_fields: &FieldReader<'_>) -> Result<Self> {
        Ok(Entry)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Type;

impl Record for Type {
    const NAME: &'static str = "Type";
    const FIELDS: &'static [&'static str] = &[];

    fn encode_fields(&self, _out: &mut FieldWriter) -> Result<()> {
        Ok(())
    }

    fn decode_fields(_fields: &FieldReader<'_>) -> Result<Self> {
        Ok(Type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSubType;

impl Record for InterfaceSubType {
    const NAME: &'static str = "Interface_SubType";
    const FIELDS: &'static [&'static str] = &[];

    fn encode_fields(&self, _out: &mut FieldWriter) -> Result<()> {
        Ok(())
    }

    fn decode_fields(_fields: &FieldReader<'_>) -> Result<Self> {
        Ok(InterfaceSubType)
    }
}

impl Variant for InterfaceSubType {
    const TAG: &'static str = "SubType";
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interface {
    SubType(InterfaceSubType),
}

impl polymorphic::Interface for Interface {
    const NAME: &'static str = "Interface";
    const TAGS: &'static [&'static str] = &[InterfaceSubType::TAG];

    fn discriminant(&self) -> &'static str {
        match self {
            Interface::SubType(_) => InterfaceSubType::TAG,
        }
    }

    fn encode_variant(&self) -> Result<Mapping> {
        match self {
            Interface::SubType(v) => polymorphic::encode_variant(v),
        }
    }

    fn decode_variant(tag: &str, fields: &Mapping) -> Result<Self> {
        match tag {
            InterfaceSubType::TAG => Ok(Interface::SubType(polymorphic::decode_variant(fields)?)),
            other => Err(polymorphic::unknown_tag::<Self>(other)),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Enum {
    name: &'static str,
    ordinal: i64,
}

static ENUM_MEMBERS: [Enum; 1] = [Enum { name: "Variant", ordinal: 1 }];

impl Enum {
    pub fn variant() -> &'static Enum {
        &ENUM_MEMBERS[0]
    }
}

impl Enumeration for Enum {
    const NAME: &'static str = "Enum";
    type Ordinal = i64;

    fn members() -> &'static [Self] {
        &ENUM_MEMBERS
    }

    fn ordinal(&self) -> i64 {
        self.ordinal
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tuple;

impl tuple::Tuple for Tuple {
    const NAME: &'static str = "Tuple";
    const ARITY: usize = 0;

    fn encode_elements(&self, _out: &mut ElementWriter) -> Result<()> {
        Ok(())
    }

    fn decode_elements(_elements: &mut ElementReader<'_>) -> Result<Self> {
        Ok(Tuple)
    }
}

record_codec!(Entry, Type);
tuple_codec!(Tuple);
interface_codec!(Interface);

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Fieldless Rust enum; members live in one static array.
#[derive(Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

static ROLES: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

impl Enumeration for Role {
    const NAME: &'static str = "Role";
    type Ordinal = i64;

    fn members() -> &'static [Self] {
        &ROLES
    }

    fn ordinal(&self) -> i64 {
        match self {
            Role::Admin => 1,
            Role::Editor => 2,
            Role::Viewer => 3,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }
}

/// `enum Color as string`.
#[derive(Debug, PartialEq, Eq)]
pub struct Color {
    name: &'static str,
    value: &'static str,
}

static COLORS: [Color; 3] = [
    Color { name: "Red", value: "red" },
    Color { name: "Green", value: "green" },
    Color { name: "Blue", value: "blue" },
];

impl Color {
    pub fn red() -> &'static Color {
        &COLORS[0]
    }

    pub fn green() -> &'static Color {
        &COLORS[1]
    }

    pub fn blue() -> &'static Color {
        &COLORS[2]
    }
}

impl Enumeration for Color {
    const NAME: &'static str = "Color";
    type Ordinal = &'static str;

    fn members() -> &'static [Self] {
        &COLORS
    }

    fn ordinal(&self) -> &'static str {
        self.value
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Duplicate ordinals: rejected by `verify_ordinals`.
#[derive(Debug, PartialEq)]
pub struct Clashing {
    name: &'static str,
    ordinal: i64,
}

static CLASHING: [Clashing; 2] = [
    Clashing { name: "A", ordinal: 7 },
    Clashing { name: "B", ordinal: 7 },
];

impl Enumeration for Clashing {
    const NAME: &'static str = "Clashing";
    type Ordinal = i64;

    fn members() -> &'static [Self] {
        &CLASHING
    }

    fn ordinal(&self) -> i64 {
        self.ordinal
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Priority {
    Low = 0,
    Normal = 5,
    High = 10,
}

repr_enum_codec!(Priority);

// ---------------------------------------------------------------------------
// Tuples
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Point(pub f64, pub f64);

impl tuple::Tuple for Point {
    const NAME: &'static str = "Point";
    const ARITY: usize = 2;

    fn encode_elements(&self, out: &mut ElementWriter) -> Result<()> {
        out.push(&self.0)?;
        out.push(&self.1)
    }

    fn decode_elements(elements: &mut ElementReader<'_>) -> Result<Self> {
        Ok(Point(elements.read()?, elements.read()?))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Labeled(pub String, pub u32, pub &'static Role);

impl tuple::Tuple for Labeled {
    const NAME: &'static str = "Labeled";
    const ARITY: usize = 3;

    fn encode_elements(&self, out: &mut ElementWriter) -> Result<()> {
        out.push(&self.0)?;
        out.push(&self.1)?;
        out.push(&self.2)
    }

    fn decode_elements(elements: &mut ElementReader<'_>) -> Result<Self> {
        Ok(Labeled(elements.read()?, elements.read()?, elements.read()?))
    }
}

tuple_codec!(Point, Labeled);

// ---------------------------------------------------------------------------
// Records with populated fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
    pub tags: Vec<String>,
    pub role: &'static Role,
    pub favorite: Option<&'static Color>,
    pub avatar: Option<Bytes>,
    pub joined: DateTime<Utc>,
    pub home: Point,
    pub attributes: BTreeMap<String, String>,
}

impl Record for Person {
    const NAME: &'static str = "Person";
    const FIELDS: &'static [&'static str] = &[
        "name", "age", "email", "tags", "role", "favorite", "avatar", "joined", "home",
        "attributes",
    ];

    fn encode_fields(&self, out: &mut FieldWriter) -> Result<()> {
        out.required("name", &self.name)?;
        out.required("age", &self.age)?;
        out.optional("email", &self.email)?;
        out.required("tags", &self.tags)?;
        out.required("role", &self.role)?;
        out.optional("favorite", &self.favorite)?;
        out.optional("avatar", &self.avatar)?;
        out.required("joined", &self.joined)?;
        out.required("home", &self.home)?;
        out.required("attributes", &self.attributes)
    }

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
        Ok(Person {
            name: fields.required("name")?,
            age: fields.required("age")?,
            email: fields.optional("email")?,
            tags: fields.required("tags")?,
            role: fields.required("role")?,
            favorite: fields.optional("favorite")?,
            avatar: fields.optional("avatar")?,
            joined: fields.required("joined")?,
            home: fields.required("home")?,
            attributes: fields.required("attributes")?,
        })
    }
}

pub fn sample_person() -> Person {
    let mut attributes = BTreeMap::new();
    attributes.insert("team".to_string(), "codecs".to_string());

    Person {
        name: "Ada".to_string(),
        age: 36,
        email: Some("ada@example.org".to_string()),
        tags: vec!["admin".to_string(), "ops".to_string()],
        role: Role::from_ordinal(1).expect("Admin is ordinal 1"),
        favorite: Some(Color::green()),
        avatar: Some(Bytes(vec![1, 2, 3, 255])),
        joined: DateTime::parse_from_rfc3339("2021-06-01T08:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc),
        home: Point(51.5, -0.12),
        attributes,
    }
}

// ---------------------------------------------------------------------------
// Polymorphic: Shape = Circle | Square | Group
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub center: Point,
}

impl Record for Circle {
    const NAME: &'static str = "Shape_Circle";
    const FIELDS: &'static [&'static str] = &["radius", "center"];

    fn encode_fields(&self, out: &mut FieldWriter) -> Result<()> {
        out.required("radius", &self.radius)?;
        out.required("center", &self.center)
    }

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
        Ok(Circle {
            radius: fields.required("radius")?,
            center: fields.required("center")?,
        })
    }
}

impl Variant for Circle {
    const TAG: &'static str = "circle";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub side: f64,
    pub color: &'static Color,
}

impl Record for Square {
    const NAME: &'static str = "Shape_Square";
    const FIELDS: &'static [&'static str] = &["side", "color"];

    fn encode_fields(&self, out: &mut FieldWriter) -> Result<()> {
        out.required("side", &self.side)?;
        out.required("color", &self.color)
    }

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
        Ok(Square {
            side: fields.required("side")?,
            color: fields.required("color")?,
        })
    }
}

impl Variant for Square {
    const TAG: &'static str = "square";
}

/// Nested polymorphism: members are themselves shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub label: Option<String>,
    pub members: Vec<Shape>,
}

impl Record for Group {
    const NAME: &'static str = "Shape_Group";
    const FIELDS: &'static [&'static str] = &["name", "label", "members"];

    fn encode_fields(&self, out: &mut FieldWriter) -> Result<()> {
        out.required("name", &self.name)?;
        out.optional("label", &self.label)?;
        out.required("members", &self.members)
    }

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
        Ok(Group {
            name: fields.required("name")?,
            label: fields.optional("label")?,
            members: fields.required("members")?,
        })
    }
}

impl Variant for Group {
    const TAG: &'static str = "group";
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    Group(Group),
}

impl polymorphic::Interface for Shape {
    const NAME: &'static str = "Shape";
    const TAGS: &'static [&'static str] = &[Circle::TAG, Square::TAG, Group::TAG];

    fn discriminant(&self) -> &'static str {
        match self {
            Shape::Circle(_) => Circle::TAG,
            Shape::Square(_) => Square::TAG,
            Shape::Group(_) => Group::TAG,
        }
    }

    fn encode_variant(&self) -> Result<Mapping> {
        match self {
            Shape::Circle(v) => polymorphic::encode_variant(v),
            Shape::Square(v) => polymorphic::encode_variant(v),
            Shape::Group(v) => polymorphic::encode_variant(v),
        }
    }

    fn decode_variant(tag: &str, fields: &Mapping) -> Result<Self> {
        match tag {
            Circle::TAG => Ok(Shape::Circle(polymorphic::decode_variant(fields)?)),
            Square::TAG => Ok(Shape::Square(polymorphic::decode_variant(fields)?)),
            Group::TAG => Ok(Shape::Group(polymorphic::decode_variant(fields)?)),
            other => Err(polymorphic::unknown_tag::<Self>(other)),
        }
    }
}

interface_codec!(Shape);

/// A plain record holding an interface-typed field.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub title: String,
    pub priority: Priority,
    pub shape: Shape,
}

impl Record for Drawing {
    const NAME: &'static str = "Drawing";
    const FIELDS: &'static [&'static str] = &["title", "priority", "shape"];

    fn encode_fields(&self, out: &mut FieldWriter) -> Result<()> {
        out.required("title", &self.title)?;
        out.required("priority", &self.priority)?;
        out.required("shape", &self.shape)
    }

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
        Ok(Drawing {
            title: fields.required("title")?,
            priority: fields.required("priority")?,
            shape: fields.required("shape")?,
        })
    }
}

record_codec!(Person, Drawing);

pub fn sample_drawing() -> Drawing {
    Drawing {
        title: "logo".to_string(),
        priority: Priority::High,
        shape: Shape::Group(Group {
            name: "outer".to_string(),
            label: None,
            members: vec![
                Shape::Circle(Circle { radius: 2.5, center: Point(0.0, 1.0) }),
                Shape::Square(Square { side: 4.0, color: Color::blue() }),
                Shape::Group(Group {
                    name: "inner".to_string(),
                    label: Some("empty".to_string()),
                    members: vec![],
                }),
            ],
        }),
    }
}
