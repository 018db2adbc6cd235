//! # mysc 性能基准测试
//!
//! 使用 Criterion.rs 进行性能基准测试。
//!
//! ## 基准测试分组
//! - `frontend`: 词法与语法分析
//! - `codegen`: 代码生成
//! - `transpile`: 完整流程
//!
//! ## 使用方法
//! ```bash
//! cargo bench              # 运行所有
//! cargo bench transpile    # 只运行完整流程
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use mysc::frontend;
use mysc::middle::ModuleTranslator;

/// 代表性模块：类、递归函数、控制流与异常
const SOURCE: &str = r#"
class Counter:
    def __init__(self, start: int):
        self.value = start

    def increment(self, step: int):
        self.value += step

    def get(self) -> int:
        return self.value

def fib(n: int) -> int:
    if n < 2:
        return n
    return fib(n - 1) + fib(n - 2)

def total(values: [int]) -> int:
    result: int = 0
    for value in values:
        if value % 2 == 0 and value > 10:
            continue
        result += value * value
    return result

def risky(x: int) -> int:
    try:
        check(x)
    except ValueError as error:
        raise
    finally:
        log(x)
    return x

def main(args: [str]):
    counter = Counter(0)
    values: [int] = [1, 2, 3, 4, 5]
    for i in values:
        counter.increment(fib(i))
    print(counter.get(), total(values), args)
"#;

/// 由代表性模块重复拼接而成的大模块
fn large_source() -> String {
    let mut source = String::new();
    for i in 0..50 {
        source.push_str(&format!(
            "def f{}(x: int, ys: [Foo]) -> int:\n    while x > 0:\n        x -= 1\n    return x + {}\n\n",
            i, i
        ));
    }
    source
}

fn bench_frontend(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontend");
    group.bench_function("parse", |b| {
        b.iter(|| frontend::parse(black_box(SOURCE)).unwrap())
    });
    group.finish();
}

fn bench_codegen(c: &mut Criterion) {
    let module = frontend::parse(SOURCE).unwrap();
    let mut group = c.benchmark_group("codegen");
    group.bench_function("translate", |b| {
        b.iter(|| {
            ModuleTranslator::new()
                .translate(black_box(&module))
                .unwrap()
        })
    });
    group.finish();
}

fn bench_transpile(c: &mut Criterion) {
    let large = large_source();
    let mut group = c.benchmark_group("transpile");
    group.bench_function("module", |b| {
        b.iter(|| mysc::transpile(black_box(SOURCE), "bench.mys").unwrap())
    });
    group.bench_function("large_module", |b| {
        b.iter(|| mysc::transpile(black_box(&large), "large.mys").unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_frontend, bench_codegen, bench_transpile);
criterion_main!(benches);
