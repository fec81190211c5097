//! Unit tests for the diff codec.


/// A `git diff` touching a modified, a deleted, an added and a renamed file.
pub(super) const GIT_DIFF: &str = "\
diff --git a/backend/a.go b/backend/a.go
index 1111111..2222222 100644
--- a/backend/a.go
+++ b/backend/a.go
@@ -1,3 +1,3 @@ package main
 package main
-var x = 1
+var x = 2

diff --git a/docs/old.md b/docs/old.md
deleted file mode 100644
index 3333333..0000000
--- a/docs/old.md
+++ /dev/null
@@ -1,2 +0,0 @@
-# Old
-gone
diff --git a/frontend/b.ts b/frontend/b.ts
new file mode 100644
index 0000000..4444444
--- /dev/null
+++ b/frontend/b.ts
@@ -0,0 +1,1 @@
+export const b = 1;
\\ No newline at end of file
diff --git a/src/old.rs b/src/new.rs
similarity index 100%
rename from src/old.rs
rename to src/new.rs
";

/// A `git diff --binary` adding one file, followed by a text change.
pub(super) const BINARY_DIFF: &str = "\
diff --git a/backend/x.bin b/backend/x.bin
new file mode 100644
index 0000000..1111111
GIT binary patch
literal 3
KcmZQz00001

literal 0
HcmV?d00001

diff --git a/backend/y.txt b/backend/y.txt
index 2222222..3333333 100644
--- a/backend/y.txt
+++ b/backend/y.txt
@@ -1,1 +1,1 @@
-old
+new
";
