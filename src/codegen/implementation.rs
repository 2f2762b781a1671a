//! Implementation file: constructor, finalizer, trampolines, and the
//! `JSClass` registration block.

use super::trampoline::emit_trampoline;
use super::{Banner, Naming};
use crate::analysis::ClassPlan;
use std::fmt::{self, Write};

const FRAMEWORK_IMPORTS: &[&str] = &["<objc/runtime.h>", "\"JRSwizzle.h\""];
const ENGINE_IMPORTS: &[&str] = &["\"jstypedarray.h\"", "\"ScriptingCore.h\""];

pub fn emit_implementation(
    out: &mut String,
    plan: &ClassPlan,
    parent_name: &str,
    naming: &Naming,
    banner: &Banner,
) -> fmt::Result {
    let class_name = plan.class_name.as_str();

    banner.write_to(out)?;
    write_imports(out, class_name, naming)?;
    write_constructor(out, class_name, naming)?;
    write_destructor(out, class_name, naming)?;
    for method in &plan.accepted {
        emit_trampoline(out, class_name, method, naming)?;
    }
    write_registration(out, plan, parent_name, naming)
}

fn write_imports(out: &mut String, class_name: &str, naming: &Naming) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "// needed for callbacks from objective-c to JS")?;
    for import in FRAMEWORK_IMPORTS {
        writeln!(out, "#import {}", import)?;
    }
    writeln!(out)?;
    for import in ENGINE_IMPORTS {
        writeln!(out, "#import {}", import)?;
    }
    writeln!(out)?;
    writeln!(out, "#import \"{}\"", naming.header_file(class_name))?;
    writeln!(out)
}

fn write_constructor(out: &mut String, class_name: &str, naming: &Naming) -> fmt::Result {
    let proxy = naming.proxy(class_name);

    writeln!(out)?;
    writeln!(out, "JSClass* {}_class = NULL;", proxy)?;
    writeln!(out, "JSObject* {}_object = NULL;", proxy)?;
    writeln!(out)?;
    writeln!(out, "// Constructor")?;
    writeln!(
        out,
        "JSBool {}_constructor(JSContext *cx, uint32_t argc, jsval *vp)",
        proxy
    )?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "\tJSObject *jsobj = JS_NewObject(cx, {p}_class, {p}_object, NULL);",
        p = proxy
    )?;
    writeln!(out, "\t{c} *realObj = [{c} alloc];", c = class_name)?;
    writeln!(out)?;
    writeln!(
        out,
        "\t{p} *proxy = [[{p} alloc] initWithJSObject:jsobj andRealObject:realObj];",
        p = proxy
    )?;
    writeln!(out)?;
    writeln!(out, "\t[realObj release];")?;
    writeln!(out)?;
    writeln!(out, "\tJS_SetPrivate(jsobj, proxy);")?;
    writeln!(out, "\tJS_SET_RVAL(cx, vp, OBJECT_TO_JSVAL(jsobj));")?;
    writeln!(out)?;
    writeln!(out, "\treturn JS_TRUE;")?;
    writeln!(out, "}}")
}

fn write_destructor(out: &mut String, class_name: &str, naming: &Naming) -> fmt::Result {
    let proxy = naming.proxy(class_name);

    writeln!(out)?;
    writeln!(out, "// Destructor")?;
    writeln!(out, "void {}_finalize(JSContext *cx, JSObject *obj)", proxy)?;
    writeln!(out, "{{")?;
    writeln!(out, "\t{p} *pt = ({p}*)JS_GetPrivate(obj);", p = proxy)?;
    writeln!(out, "\tif (pt) {{")?;
    writeln!(out, "\t\t[pt release];")?;
    writeln!(out)?;
    writeln!(out, "\t\tJS_free(cx, pt);")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")
}

fn write_registration(
    out: &mut String,
    plan: &ClassPlan,
    parent_name: &str,
    naming: &Naming,
) -> fmt::Result {
    let proxy = naming.proxy(&plan.class_name);
    let parent_proxy = naming.proxy(parent_name);

    writeln!(out)?;
    writeln!(out, "@implementation {}", proxy)?;
    writeln!(out)?;
    writeln!(
        out,
        "+(void) createClassWithContext:(JSContext*)cx object:(JSObject*)globalObj name:(NSString*)name"
    )?;
    writeln!(out, "{{")?;
    writeln!(out, "\t{}_class = (JSClass *)calloc(1, sizeof(JSClass));", proxy)?;
    writeln!(out, "\t{}_class->name = [name UTF8String];", proxy)?;

    let hooks = [
        ("addProperty", "JS_PropertyStub".to_string()),
        ("delProperty", "JS_PropertyStub".to_string()),
        ("getProperty", "JS_PropertyStub".to_string()),
        ("setProperty", "JS_StrictPropertyStub".to_string()),
        ("enumerate", "JS_EnumerateStub".to_string()),
        ("resolve", "JS_ResolveStub".to_string()),
        ("convert", "JS_ConvertStub".to_string()),
        ("finalize", format!("{}_finalize", proxy)),
        ("flags", "JSCLASS_HAS_PRIVATE".to_string()),
    ];
    for (field, value) in &hooks {
        writeln!(out, "\t{}_class->{} = {};", proxy, field, value)?;
    }

    writeln!(out)?;
    writeln!(out, "\tstatic JSPropertySpec properties[] = {{")?;
    writeln!(out, "\t\t{{0, 0, 0, 0, 0}}")?;
    writeln!(out, "\t}};")?;
    writeln!(out)?;
    writeln!(out, "\tstatic JSFunctionSpec funcs[] = {{")?;
    for method in &plan.accepted {
        writeln!(
            out,
            "\t\tJS_FN(\"{}\", {}_{}, 1, JSPROP_PERMANENT | JSPROP_SHARED),",
            method.selector.script_name(),
            proxy,
            method.selector.native_name()
        )?;
    }
    writeln!(out, "\t\tJS_FS_END")?;
    writeln!(out, "\t}};")?;
    writeln!(out)?;
    writeln!(out, "\tstatic JSFunctionSpec st_funcs[] = {{")?;
    writeln!(out, "\t\tJS_FS_END")?;
    writeln!(out, "\t}};")?;
    writeln!(out)?;
    writeln!(
        out,
        "\t{p}_object = JS_InitClass(cx, globalObj, {pp}_object, {p}_class, {p}_constructor,0,properties,funcs,NULL,st_funcs);",
        p = proxy,
        pp = parent_proxy
    )?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "@end")
}
