//! Compile-helper script bodies.
//!
//! One `pdflatex` invocation per generated register, with a success check on
//! the expected PDF artifact afterwards. Both shell flavours are always
//! emitted; the single-course `test_compile` variants cover only the first
//! register so the toolchain can be sanity-checked cheaply.

use crate::pipeline::GeneratedFile;

fn pdf_name(file: &GeneratedFile) -> String {
    format!("{}_register.pdf", file.course_code)
}

/// `compile_all.sh` body.
pub fn compile_all_sh(files: &[GeneratedFile]) -> String {
    let mut script = String::from(
        "#!/bin/bash\necho \"Compiling LaTeX files...\"\ncd \"$(dirname \"$0\")\"\necho \"\"\n\n",
    );
    for file in files {
        let pdf = pdf_name(file);
        script.push_str(&format!(
            "echo \"Compiling {code}...\"\n\
             pdflatex -interaction=nonstopmode \"{tex}\"\n\
             if [ -f \"{pdf}\" ]; then\n  echo \"  Success!\"\nelse\n  echo \"  Failed - check .log file\"\nfi\necho \"\"\n",
            code = file.course_code,
            tex = file.filename,
        ));
    }
    script.push_str("echo \"All compilations attempted!\"\nrm -rf *.aux *.log\n");
    script
}

/// `compile_all.bat` body.
pub fn compile_all_bat(files: &[GeneratedFile]) -> String {
    let mut script =
        String::from("@echo off\necho Compiling LaTeX files...\ncd /d \"%~dp0\"\necho.\n\n");
    for file in files {
        let pdf = pdf_name(file);
        script.push_str(&format!(
            "echo Compiling {code}...\n\
             pdflatex -interaction=nonstopmode \"{tex}\"\n\
             if exist \"{pdf}\" (\n  echo   Success!\n) else (\n  echo   Failed - check .log file\n)\necho.\n",
            code = file.course_code,
            tex = file.filename,
        ));
    }
    script.push_str("echo All compilations attempted!\npause\n");
    script
}

/// `test_compile.sh` body — compiles only `file` (the first register).
pub fn test_compile_sh(file: &GeneratedFile) -> String {
    let pdf = pdf_name(file);
    format!(
        "#!/bin/bash\ncd \"$(dirname \"$0\")\"\n\
         pdflatex -interaction=nonstopmode \"{tex}\"\n\
         if [ -f \"{pdf}\" ]; then\n  echo \"Success! PDF created: {pdf}\"\nelse\n  echo \"Compilation failed. Check {code}_register.log for errors.\"\nfi\n",
        tex = file.filename,
        code = file.course_code,
    )
}

/// `test_compile.bat` body — compiles only `file` (the first register).
pub fn test_compile_bat(file: &GeneratedFile) -> String {
    let pdf = pdf_name(file);
    format!(
        "@echo off\ncd /d \"%~dp0\"\n\
         pdflatex -interaction=nonstopmode \"{tex}\"\n\
         if exist \"{pdf}\" (\n  echo Success! PDF created: {pdf}\n  pause\n) else (\n  echo Compilation failed. Check {code}_register.log for errors.\n  pause\n)\n",
        tex = file.filename,
        code = file.course_code,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
