//! Accessor method bodies.

use accgen_codegen::{AccessorKind, CodeBuilder, MethodRequest};
use accgen_core::{camelize, singularize};
use accgen_ir::trailing_segment;

/// Backing collection created for collection properties that are still `null`.
const ARRAY_COLLECTION: &str = "\\Doctrine\\Common\\Collections\\ArrayCollection";

/// Names shared by every method of one trait.
pub(crate) struct MethodContext<'a> {
    /// Name of the trait the methods live in, used for fluent `@return` tags
    pub trait_name: &'a str,
    /// Fully qualified read-only collection wrapper (imported by the unit)
    pub collection_wrapper: &'a str,
}

/// Render one accessor method.
pub(crate) fn render_method(b: &mut CodeBuilder, ctx: &MethodContext<'_>, request: &MethodRequest) {
    match request.operation.kind {
        AccessorKind::Get => render_get(b, ctx, request),
        AccessorKind::Set => render_set(b, ctx, request),
        AccessorKind::Add => render_add(b, ctx, request),
        AccessorKind::Remove => render_remove(b, ctx, request),
    }
}

/// Type for docblocks: the fully qualified class if resolved, the hint as
/// written otherwise.
fn doc_type(request: &MethodRequest) -> String {
    request
        .fully_qualified_type
        .clone()
        .or_else(|| request.property.type_hint().map(String::from))
        .unwrap_or_else(|| "mixed".to_string())
}

/// Parameter with a class type hint when the property is a complex type.
fn parameter(request: &MethodRequest, name: &str) -> String {
    match request.property.type_hint() {
        Some(hint) if request.property.is_complex_type() => format!("{} ${}", hint, name),
        _ => format!("${}", name),
    }
}

fn argument_count_guard(b: &mut CodeBuilder, method: &str, expected: usize) {
    let (condition, message) = match expected {
        0 => (
            "func_num_args() > 0".to_string(),
            format!("{}() has no arguments but %d given.", method),
        ),
        n => (
            format!("func_num_args() != {}", n),
            format!("{}() has {} argument(s) but %d given.", method, n),
        ),
    };

    b.push_line(&format!("if ({}) {{", condition))
        .push_indent()
        .push_line("throw new \\BadMethodCallException(")
        .push_indent()
        .push_line(&format!("sprintf('{}', func_num_args())", message))
        .push_dedent()
        .push_line(");")
        .push_dedent()
        .push_line("}");
}

fn initialize_collection(b: &mut CodeBuilder, field: &str) {
    b.push_line(&format!("if ($this->{} === null) {{", field))
        .push_indent()
        .push_line(&format!("$this->{} = new {}();", field, ARRAY_COLLECTION))
        .push_dedent()
        .push_line("}");
}

fn render_get(b: &mut CodeBuilder, ctx: &MethodContext<'_>, request: &MethodRequest) {
    let property = &request.property;
    let method = &request.operation.method;
    let field = &property.name;
    let guards_unset = !property.collection && !property.nullable;

    let return_type = if property.collection {
        format!("{}|{}[]", trailing_segment(ctx.collection_wrapper), doc_type(request))
    } else if property.nullable {
        format!("{}|null", doc_type(request))
    } else {
        doc_type(request)
    };

    let mut doc = vec![format!("Gets {}", field), String::new()];
    doc.push("@throws \\BadMethodCallException".to_string());
    if guards_unset {
        doc.push("@throws \\LogicException".to_string());
    }
    doc.push(String::new());
    doc.push(format!("@return {}", return_type));

    b.push_docblock(&doc);
    b.push_block(&format!("public function {}()", method), |b| {
        argument_count_guard(b, method, 0);
        b.push_blank();

        if property.collection {
            initialize_collection(b, field);
            b.push_blank();
            b.push_line(&format!(
                "return new {}($this->{});",
                trailing_segment(ctx.collection_wrapper),
                field
            ));
            return;
        }

        if guards_unset {
            b.push_line(&format!("if ($this->{} === null) {{", field))
                .push_indent()
                .push_line("throw new \\LogicException(sprintf(")
                .push_indent()
                .push_line(&format!(
                    "'Property %s is by default null, set it before calling %s().', '{}', '{}'",
                    field, method
                ))
                .push_dedent()
                .push_line("));")
                .push_dedent()
                .push_line("}");
            b.push_blank();
        }

        b.push_line(&format!("return $this->{};", field));
    });
}

fn render_set(b: &mut CodeBuilder, ctx: &MethodContext<'_>, request: &MethodRequest) {
    let property = &request.property;
    let method = &request.operation.method;
    let field = &property.name;
    let variable = camelize(field);

    let mut param = parameter(request, &variable);
    let mut param_type = doc_type(request);
    if property.nullable {
        if property.is_complex_type() {
            param.push_str(" = null");
        }
        param_type.push_str("|null");
    }

    let mut doc = vec![
        format!("Sets {}", field),
        String::new(),
        format!("@param {} ${}", param_type, variable),
        format!("@return $this|{}", ctx.trait_name),
        "@throws \\BadMethodCallException".to_string(),
    ];
    if !property.nullable {
        doc.push("@throws \\InvalidArgumentException".to_string());
    }

    b.push_docblock(&doc);
    b.push_block(&format!("public function {}({})", method, param), |b| {
        argument_count_guard(b, method, 1);
        b.push_blank();

        if !property.nullable {
            b.push_line(&format!("if (${} === null) {{", variable))
                .push_indent()
                .push_line(&format!(
                    "throw new \\InvalidArgumentException('{}() does not accept null.');",
                    method
                ))
                .push_dedent()
                .push_line("}");
            b.push_blank();
        }

        b.push_line(&format!("$this->{} = ${};", field, variable))
            .push_blank()
            .push_line("return $this;");
    });
}

fn render_add(b: &mut CodeBuilder, ctx: &MethodContext<'_>, request: &MethodRequest) {
    let field = &request.property.name;
    let method = &request.operation.method;
    let element = camelize(&singularize(field));

    b.push_docblock(&[
        format!("Adds the given {} to this collection.", element),
        String::new(),
        format!("@param {} ${}", doc_type(request), element),
        format!("@return $this|{}", ctx.trait_name),
        "@throws \\BadMethodCallException".to_string(),
    ]);
    b.push_block(
        &format!("public function {}({})", method, parameter(request, &element)),
        |b| {
            argument_count_guard(b, method, 1);
            b.push_blank();
            initialize_collection(b, field);
            b.push_blank();
            b.push_line(&format!("if ($this->{}->contains(${})) {{", field, element))
                .push_indent()
                .push_line("return $this;")
                .push_dedent()
                .push_line("}")
                .push_blank()
                .push_line(&format!("$this->{}->add(${});", field, element))
                .push_blank()
                .push_line("return $this;");
        },
    );
}

fn render_remove(b: &mut CodeBuilder, ctx: &MethodContext<'_>, request: &MethodRequest) {
    let field = &request.property.name;
    let method = &request.operation.method;
    let element = camelize(&singularize(field));

    b.push_docblock(&[
        format!("Removes the given {} from this collection.", element),
        String::new(),
        format!("@param {} ${}", doc_type(request), element),
        format!("@return $this|{}", ctx.trait_name),
        "@throws \\BadMethodCallException".to_string(),
    ]);
    b.push_block(
        &format!("public function {}({})", method, parameter(request, &element)),
        |b| {
            argument_count_guard(b, method, 1);
            b.push_blank();
            b.push_line(&format!(
                "if ($this->{} === null || !$this->{}->contains(${})) {{",
                field, field, element
            ))
            .push_indent()
            .push_line("return $this;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line(&format!("$this->{}->removeElement(${});", field, element))
            .push_blank()
            .push_line("return $this;");
        },
    );
}
