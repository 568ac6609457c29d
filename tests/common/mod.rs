use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a small package tree exercising every discovery path: public and
/// private attributes, a private module, a nested sub-package, docstrings
/// and trailing comments.
pub fn build_package() -> TempDir {
    let dir = TempDir::new().expect("create temp package");
    let root = dir.path();

    write(
        root,
        "module1.py",
        concat!(
            "\"\"\"\n",
            "Lets put some\n",
            "comments for ATTR1 here\n",
            "\n",
            "with multiple lines...\n",
            "\"\"\"\n",
            "ATTR1: int = 42  # And some more comments here...\n",
        ),
    );
    write(
        root,
        "module2.py",
        "ATTR1 = 'text'\n_HIDDEN = True\n",
    );
    write(root, "_internal.py", "LIMIT = 100\n");
    write(root, "notes.txt", "not a module\n");

    fs::create_dir(root.join("sub")).expect("create sub-package");
    write(root, "sub/module3.py", "NESTED = [1, 2]\n");

    dir
}

fn write(root: &Path, name: &str, content: &str) {
    fs::write(root.join(name), content).expect("write fixture module");
}
