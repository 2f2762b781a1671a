//! Per-method trampolines: unpack `jsval` arguments, call the native
//! method on the proxied object, and box the result back into a `jsval`.

use super::Naming;
use crate::analysis::{BindableMethod, BoundArg, ReturnKind, ValueCategory};
use std::fmt::{self, Write};

/// Arguments start at `vp[2]`: slot 0 is the callee and slot 1 is `this`.
const FIRST_ARG_SLOT: usize = 2;

/// How one argument is pulled out of its `jsval` slot.
enum ArgConversion {
    /// C type and the `JS_ValueTo*` call filling it.
    Scalar(&'static str, &'static str),
    /// Through a temporary `JSString*` into an `NSString*`.
    String,
}

fn arg_conversion(category: ValueCategory) -> ArgConversion {
    match category {
        ValueCategory::Double => ArgConversion::Scalar("double", "JS_ValueToNumber"),
        ValueCategory::Int32 => ArgConversion::Scalar("int32_t", "JS_ValueToECMAInt32"),
        ValueCategory::Uint32 => ArgConversion::Scalar("uint32_t", "JS_ValueToECMAUint32"),
        ValueCategory::Char => ArgConversion::Scalar("uint16_t", "JS_ValueToUint16"),
        ValueCategory::Boolean => ArgConversion::Scalar("JSBool", "JS_ValueToBoolean"),
        ValueCategory::ObjectRef => ArgConversion::Scalar("JSObject*", "JS_ValueToObject"),
        ValueCategory::String => ArgConversion::String,
        ValueCategory::Void => unreachable!("void arguments are rejected during classification"),
    }
}

/// Expression that boxes `ret_val` (or signals success with no value).
pub fn return_value_expr(ret: &ReturnKind) -> &'static str {
    match ret {
        ReturnKind::Nothing => "JSVAL_TRUE",
        ReturnKind::Value { category, .. } => match category {
            ValueCategory::Int32 | ValueCategory::Uint32 | ValueCategory::Char => {
                "INT_TO_JSVAL(ret_val)"
            }
            ValueCategory::Double => "DOUBLE_TO_JSVAL(ret_val)",
            ValueCategory::Boolean => "BOOLEAN_TO_JSVAL(ret_val)",
            ValueCategory::ObjectRef => "OBJECT_TO_JSVAL(ret_val)",
            ValueCategory::String => {
                "STRING_TO_JSVAL(JS_NewStringCopyZ(cx, [ret_val UTF8String]))"
            }
            ValueCategory::Void => "JSVAL_TRUE",
        },
    }
}

fn write_arg_conversion(out: &mut String, index: usize, arg: &BoundArg) -> fmt::Result {
    let slot = index + FIRST_ARG_SLOT;
    match arg_conversion(arg.category) {
        ArgConversion::Scalar(c_type, convert) => writeln!(
            out,
            "\t{} arg{index}; {}( cx, vp[{slot}], &arg{index} );",
            c_type, convert
        ),
        ArgConversion::String => {
            writeln!(
                out,
                "\tJSString *tmp_arg{index} = JS_ValueToString( cx, vp[{slot}] );"
            )?;
            writeln!(
                out,
                "\tNSString *arg{index} = [NSString stringWithUTF8String: JS_EncodeString(cx, tmp_arg{index})];"
            )
        }
    }
}

/// The Objective-C message send, e.g. `[real setX:(float)arg0 y:(float)arg1]`.
pub fn call_expression(method: &BindableMethod) -> String {
    let selector = &method.selector;
    if selector.arity() == 0 {
        return format!("[real {}]", selector.as_str());
    }

    let parts: Vec<String> = selector
        .labels()
        .iter()
        .zip(&method.args)
        .enumerate()
        .map(|(i, (label, arg))| format!("{}:({})arg{}", label, arg.declared_type, i))
        .collect();
    format!("[real {}]", parts.join(" "))
}

fn describe_return(ret: &ReturnKind) -> &str {
    match ret {
        ReturnKind::Nothing => "void",
        ReturnKind::Value { declared_type, .. } => declared_type,
    }
}

pub fn emit_trampoline(
    out: &mut String,
    class_name: &str,
    method: &BindableMethod,
    naming: &Naming,
) -> fmt::Result {
    let proxy = naming.proxy(class_name);
    let base_proxy = naming.proxy(naming.base_class());
    let declared: Vec<&str> = method.args.iter().map(|a| a.declared_type.as_str()).collect();

    writeln!(out)?;
    writeln!(out, "// Arguments: {}", declared.join(", "))?;
    writeln!(out, "// Ret value: {}", describe_return(&method.ret))?;
    writeln!(
        out,
        "JSBool {}_{}(JSContext *cx, uint32_t argc, jsval *vp) {{",
        proxy,
        method.selector.native_name()
    )?;
    writeln!(out, "\t")?;
    writeln!(out, "\tJSObject* obj = (JSObject *)JS_THIS_OBJECT(cx, vp);")?;
    writeln!(
        out,
        "\t{base} *proxy = ({base}*) JS_GetPrivate( obj );",
        base = base_proxy
    )?;
    writeln!(out, "\tNSCAssert( proxy, @\"Invalid Proxy object\");")?;
    writeln!(
        out,
        "\tNSCAssert( [proxy isInitialized], @\"Object not initialized. error\");"
    )?;
    writeln!(out, "\t")?;
    writeln!(out, "\t{cls} * real = ({cls}*)[proxy realObj];", cls = class_name)?;
    writeln!(out, "\tNSCAssert( real, @\"Invalid real object\");")?;
    writeln!(out)?;
    writeln!(
        out,
        "\tNSCAssert( argc == {}, @\"Invalid number of arguments\" );",
        method.arity()
    )?;

    for (index, arg) in method.args.iter().enumerate() {
        write_arg_conversion(out, index, arg)?;
    }

    let call = call_expression(method);
    match &method.ret {
        ReturnKind::Value { declared_type, .. } => {
            writeln!(out, "\t{} ret_val;", declared_type)?;
            writeln!(out)?;
            writeln!(out, "\tret_val = {};", call)?;
        }
        ReturnKind::Nothing => {
            writeln!(out)?;
            writeln!(out, "\t{};", call)?;
        }
    }

    writeln!(out, "\tJS_SET_RVAL(cx, vp, {});", return_value_expr(&method.ret))?;
    writeln!(out)?;
    writeln!(out, "\treturn JS_TRUE;")?;
    writeln!(out, "}}")
}
