use clap::ValueEnum;
use crossterm::style::Stylize;
use miniclass_class_file::{
    attributes::Attributes,
    constant_pool::{
        ClassInfo, InvokeDynamicInfo, MethodHandleInfo, MethodTypeInfo, NameAndTypeInfo, RefInfo,
    },
    AccessFlags, ClassFile, ConstantPool, CpInfo,
};

// Adversarial pools can form reference cycles; cap the walk.
const RESOLVE_DEPTH_LIMIT: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Header,
    Pool,
    Interfaces,
    Fields,
    Methods,
    Attributes,
}

pub fn print_class(class_file: &ClassFile, section: Option<Section>) {
    let wanted = |s: Section| section.map_or(true, |chosen| chosen == s);

    if wanted(Section::Header) {
        print_header(class_file);
    }
    if wanted(Section::Pool) {
        print_pool(&class_file.constant_pool);
    }
    if wanted(Section::Interfaces) {
        print_interfaces(class_file);
    }
    if wanted(Section::Fields) {
        print_fields(class_file);
    }
    if wanted(Section::Methods) {
        print_methods(class_file);
    }
    if wanted(Section::Attributes) {
        println!("{}", "ATTRIBUTES".cyan());
        print_attributes(&class_file.constant_pool, &class_file.attributes, 0);
    }
}

fn print_header(class_file: &ClassFile) {
    println!("{}", "HEADER".cyan());
    print_value("minor_version", &class_file.minor_version, 0);
    print_value("major_version", &class_file.major_version, 0);
    print_value(
        "constant_pool_count",
        &(class_file.constant_pool.len() + 1),
        0,
    );
    println!(
        "{} = {:?}",
        "access_flags".bold(),
        class_file.access_flags
    );
    print_index_line(
        &class_file.constant_pool,
        "this_class_index",
        class_file.this_class,
        0,
    );
    print_index_line(
        &class_file.constant_pool,
        "super_class_index",
        class_file.super_class,
        0,
    );
}

fn print_pool(pool: &ConstantPool) {
    println!("{}", "CONSTANT POOL".cyan());
    for (i, entry) in pool.into_iter().enumerate() {
        println!("{}", format!("[{}]", i + 1).dark_grey());
        print_entry(pool, entry, 1);
    }
}

fn print_interfaces(class_file: &ClassFile) {
    println!("{}", "INTERFACES".cyan());
    for &index in &class_file.interfaces {
        print_index_line(&class_file.constant_pool, "interface_index", index, 0);
    }
}

fn print_fields(class_file: &ClassFile) {
    println!("{}", "FIELDS".cyan());
    for field in &class_file.fields {
        print_member(
            &class_file.constant_pool,
            field.access_flags,
            field.name_index,
            field.descriptor_index,
            &field.attributes,
        );
    }
}

fn print_methods(class_file: &ClassFile) {
    println!("{}", "METHODS".cyan());
    for method in &class_file.methods {
        print_member(
            &class_file.constant_pool,
            method.access_flags,
            method.name_index,
            method.descriptor_index,
            &method.attributes,
        );
    }
}

fn print_member(
    pool: &ConstantPool,
    access_flags: AccessFlags,
    name_index: u16,
    descriptor_index: u16,
    attributes: &Attributes,
) {
    println!("{} = {:?}", "access_flags".bold(), access_flags);
    print_index_line(pool, "name_index", name_index, 0);
    print_index_line(pool, "descriptor_index", descriptor_index, 0);
    print_attributes(pool, attributes, 0);
}

fn print_attributes(pool: &ConstantPool, attributes: &Attributes, depth: usize) {
    let pad = "  ".repeat(depth);
    println!("{pad}{}: [", "attributes".bold());
    for attribute in attributes {
        print_index_line(
            pool,
            "attribute_name_index",
            attribute.attribute_name_index,
            depth + 1,
        );
        let data = attribute
            .info
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{}{} = {}",
            "  ".repeat(depth + 1),
            "data".bold(),
            data.as_str().red()
        );
    }
    println!("{pad}]");
}

fn print_entry(pool: &ConstantPool, entry: &CpInfo, depth: usize) {
    if depth > RESOLVE_DEPTH_LIMIT {
        println!("{}...", "  ".repeat(depth));
        return;
    }

    match entry {
        CpInfo::Utf8(s) => print_tagged_value("Utf8", &s.as_str().blue(), depth),
        CpInfo::Integer(v) => print_tagged_value("Integer", &v.to_string().green(), depth),
        CpInfo::Float(bits) => print_tagged_value(
            "Float",
            &f32::from_bits(*bits as u32).to_string().green(),
            depth,
        ),
        CpInfo::Long(v) => print_tagged_value("Long", &v.to_string().green(), depth),
        CpInfo::Double(bits) => print_tagged_value(
            "Double",
            &f64::from_bits(*bits as u64).to_string().green(),
            depth,
        ),
        CpInfo::Class(ClassInfo { name_index }) => {
            print_tag("Class", depth);
            print_index_line(pool, "name_index", *name_index, depth);
        }
        CpInfo::String { string_index } => {
            print_tag("String", depth);
            print_index_line(pool, "string_index", *string_index, depth);
        }
        CpInfo::FieldRef(r) => print_ref("Fieldref", pool, r, depth),
        CpInfo::MethodRef(r) => print_ref("Methodref", pool, r, depth),
        CpInfo::InterfaceMethodRef(r) => print_ref("InterfaceMethodref", pool, r, depth),
        CpInfo::NameAndType(NameAndTypeInfo {
            name_index,
            descriptor_index,
        }) => {
            print_tag("NameAndType", depth);
            print_index_line(pool, "name_index", *name_index, depth);
            print_index_line(pool, "descriptor_index", *descriptor_index, depth);
        }
        CpInfo::MethodHandle(MethodHandleInfo {
            reference_kind,
            reference_index,
        }) => {
            print_tag("MethodHandle", depth);
            print_value("reference_kind", reference_kind, depth);
            print_index_line(pool, "reference_index", *reference_index, depth);
        }
        CpInfo::MethodType(MethodTypeInfo { descriptor_index }) => {
            print_tag("MethodType", depth);
            print_index_line(pool, "descriptor_index", *descriptor_index, depth);
        }
        CpInfo::InvokeDynamic(InvokeDynamicInfo {
            bootstrap_method_attr_index,
            name_and_type_index,
        }) => {
            print_tag("InvokeDynamic", depth);
            print_value(
                "bootstrap_method_attr_index",
                bootstrap_method_attr_index,
                depth,
            );
            print_index_line(pool, "name_and_type_index", *name_and_type_index, depth);
        }
    }
}

fn print_ref(tag: &str, pool: &ConstantPool, r: &RefInfo, depth: usize) {
    print_tag(tag, depth);
    print_index_line(pool, "class_index", r.class_index, depth);
    print_index_line(pool, "name_and_type_index", r.name_and_type_index, depth);
}

fn print_tag(tag: &str, depth: usize) {
    println!("{}{}", "  ".repeat(depth), tag.bold());
}

fn print_value(name: &str, value: &dyn std::fmt::Display, depth: usize) {
    println!(
        "{}{} = {}",
        "  ".repeat(depth),
        name.bold(),
        value.to_string().green()
    );
}

fn print_tagged_value(
    tag: &str,
    value: &dyn std::fmt::Display,
    depth: usize,
) {
    println!("{}{} = {}", "  ".repeat(depth), tag.bold(), value);
}

fn print_index_line(pool: &ConstantPool, name: &str, index: u16, depth: usize) {
    println!(
        "{}{} ({}) {}",
        "  ".repeat(depth),
        name.bold(),
        index.to_string().red(),
        "-->".dark_grey()
    );

    match pool.entry(index) {
        Ok(entry) => print_entry(pool, entry, depth + 1),
        Err(e) => println!(
            "{}{}",
            "  ".repeat(depth + 1),
            e.to_string().dark_red()
        ),
    }
}
