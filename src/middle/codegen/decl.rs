//! 声明代码生成
//!
//! 顶层语句、函数、类与方法。顶层函数的原型在生成函数体之前登记到
//! 前向声明表中，使任意顺序与相互递归的调用都能通过 C++ 编译。

use tracing::trace;

use crate::frontend::parser::ast::{ClassDef, FunctionDef, Stmt, StmtKind};
use crate::middle::codegen::stmt::lower_stmt;
use crate::middle::codegen::types::{param_string, return_type};
use crate::middle::codegen::{indent, LoweringError, LoweringResult, ModuleTranslator};

impl ModuleTranslator {
    /// 生成顶层语句
    pub(crate) fn lower_module_stmt(
        &mut self,
        stmt: &Stmt,
    ) -> LoweringResult<String> {
        match &stmt.kind {
            StmtKind::FunctionDef(function) => {
                if function.is_async || !function.decorators.is_empty() {
                    return Err(LoweringError::unsupported_construct(stmt.span));
                }
                self.lower_function_def(function)
            }
            StmtKind::ClassDef(class) => lower_class_def(class, stmt),
            StmtKind::Import(_) | StmtKind::ImportFrom { .. } => {
                Ok("#include \"todo\"".to_string())
            }
            _ => lower_stmt(stmt),
        }
    }

    /// 生成顶层函数，并登记其原型
    fn lower_function_def(
        &mut self,
        function: &FunctionDef,
    ) -> LoweringResult<String> {
        let name = function.name.value.as_str();
        let mut return_type = return_type(function.returns.as_ref())?;
        let mut params = lower_params(name, function, 0)?;
        let mut prelude = Vec::new();

        if name == "main" {
            if return_type != "void" {
                return Err(LoweringError::config("main() must return 'None'."));
            }
            return_type = "int".to_string();

            let takes_args =
                matches!(params.as_slice(), [param] if param.starts_with("List<String>& "));
            if takes_args {
                params = vec![
                    "int __argc".to_string(),
                    "const char *__argv[]".to_string(),
                ];
                prelude.push(indent(&format!(
                    "auto {} = create_args(__argc, __argv);",
                    function.params[0].name.value
                )));
            } else if !params.is_empty() {
                return Err(LoweringError::config(
                    "main() takes 'args: [str]' or no arguments.",
                ));
            }
        }

        let prototype = format!("{} {}({})", return_type, name, params.join(", "));
        trace!("Forward declaration: {}", prototype);
        self.forward_declarations.push(format!("{};", prototype));

        let mut body = prelude;
        for stmt in &function.body {
            body.push(indent(&lower_stmt(stmt)?));
        }
        if name == "main" {
            body.push(String::new());
            body.push(indent("return 0;"));
        }

        let mut code = vec![prototype, "{".to_string()];
        code.append(&mut body);
        code.push("}".to_string());
        Ok(code.join("\n"))
    }
}

/// 参数列表，跳过前 `skip` 个参数
fn lower_params(
    function_name: &str,
    function: &FunctionDef,
    skip: usize,
) -> LoweringResult<Vec<String>> {
    function
        .params
        .iter()
        .skip(skip)
        .map(|param| param_string(function_name, param))
        .collect()
}

/// `class Name { public: ... };`；只翻译方法
fn lower_class_def(
    class: &ClassDef,
    stmt: &Stmt,
) -> LoweringResult<String> {
    if !class.bases.is_empty() || !class.keywords.is_empty() || !class.decorators.is_empty() {
        return Err(LoweringError::unsupported_construct(stmt.span));
    }

    let mut members = vec![
        format!("class {} {{", class.name.value),
        "public:".to_string(),
    ];

    for member in &class.body {
        if let StmtKind::FunctionDef(method) = &member.kind {
            members.push(indent(&lower_method(&class.name.value, method, member)?));
        }
    }

    members.push("};".to_string());
    Ok(members.join("\n\n"))
}

/// 方法；`__init__` 生成构造函数
fn lower_method(
    class_name: &str,
    method: &FunctionDef,
    stmt: &Stmt,
) -> LoweringResult<String> {
    let name = method.name.value.as_str();

    if method.params.first().map(|param| param.name.value.as_str()) != Some("self") {
        return Err(LoweringError::config(
            "Methods must always take 'self' as their first argument.",
        ));
    }
    if !method.decorators.is_empty() {
        return Err(LoweringError::unsupported(
            "Methods must not be decorated.",
            stmt.span,
        ));
    }
    if method.is_async {
        return Err(LoweringError::unsupported_construct(stmt.span));
    }

    let params = lower_params(name, method, 1)?.join(", ");
    let body = method
        .body
        .iter()
        .map(|stmt| lower_stmt(stmt).map(|code| indent(&code)))
        .collect::<LoweringResult<Vec<_>>>()?
        .join("\n");

    let signature = if name == "__init__" {
        format!("{}({})", class_name, params)
    } else {
        format!(
            "{} {}({})",
            return_type(method.returns.as_ref())?,
            name,
            params
        )
    };

    Ok(format!("{}\n{{\n{}\n}}", signature, body))
}
