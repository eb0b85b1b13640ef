//! Built-in template text.
//!
//! Fragments may only reference the packages imported by [`HEADER`] and the
//! container's own `FromIterator` / `Iter()` pair.

/// Fixed header emitted before every selected fragment.
pub const HEADER: &str = r#"// Code generated by gen-collection; DO NOT EDIT.

package {{ .PkgName }}

import (
	"github.com/genkami/dogs/classes/algebra"
	"github.com/genkami/dogs/classes/cmp"
	"github.com/genkami/dogs/types/iterator"
	"github.com/genkami/dogs/types/pair"
)

// Keep every import referenced regardless of which functions are excluded.
var _ = (algebra.Monoid[int])(nil)
var _ = (cmp.Ord[int])(nil)
var _ = (iterator.Iterator[int])(nil)
var _ = (*pair.Pair[int, int])(nil)
"#;

/// Operation name and template text for every built-in operation.
pub const FRAGMENTS: &[(&str, &str)] = &[
    (
        "Find",
        r#"
// Find returns the first element in xs that satisfies the predicate fn.
// The second return value is false if no element matches.
func Find[T {{ .Constraint }}](xs {{ .TypeName }}[T], fn func(T) bool) (T, bool) {
	return iterator.Find[T](xs.Iter(), fn)
}
"#,
    ),
    (
        "FindIndex",
        r#"
// FindIndex returns the index of the first element in xs that satisfies the predicate fn.
// It returns a negative value if no element matches.
func FindIndex[T {{ .Constraint }}](xs {{ .TypeName }}[T], fn func(T) bool) int {
	return iterator.FindIndex[T](xs.Iter(), fn)
}
"#,
    ),
    (
        "FindElem",
        r#"
// FindElem returns the first element in xs that equals e according to eq.
// The second return value is false if no element matches.
func FindElem[T {{ .Constraint }}](xs {{ .TypeName }}[T], e T, eq cmp.Eq[T]) (T, bool) {
	return iterator.FindElem[T](xs.Iter(), e, eq)
}
"#,
    ),
    (
        "FindElemIndex",
        r#"
// FindElemIndex returns the index of the first element in xs that equals e according to eq.
// It returns a negative value if no element matches.
func FindElemIndex[T {{ .Constraint }}](xs {{ .TypeName }}[T], e T, eq cmp.Eq[T]) int {
	return iterator.FindElemIndex[T](xs.Iter(), e, eq)
}
"#,
    ),
    (
        "Filter",
        r#"
// Filter returns a collection containing only the elements of xs that satisfy fn.
func Filter[T {{ .Constraint }}](xs {{ .TypeName }}[T], fn func(T) bool) {{ .TypeName }}[T] {
	return FromIterator[T](iterator.Filter[T](xs.Iter(), fn))
}
"#,
    ),
    (
        "Map",
        r#"
// Map returns a collection holding the result of applying fn to each element of xs.
func Map[T, U {{ .Constraint }}](xs {{ .TypeName }}[T], fn func(T) U) {{ .TypeName }}[U] {
	return FromIterator[U](iterator.Map[T, U](xs.Iter(), fn))
}
"#,
    ),
    (
        "ForEach",
        r#"
// ForEach calls fn on each element of xs.
func ForEach[T {{ .Constraint }}](xs {{ .TypeName }}[T], fn func(T)) {
	iterator.ForEach[T](xs.Iter(), fn)
}
"#,
    ),
    (
        "Fold",
        r#"
// Fold accumulates every element of xs into init by applying fn.
func Fold[T any, U {{ .Constraint }}](init T, xs {{ .TypeName }}[U], fn func(T, U) T) T {
	return iterator.Fold[T, U](init, xs.Iter(), fn)
}
"#,
    ),
    (
        "Zip",
        r#"
// Zip combines two collections into one holding pairs of corresponding elements.
func Zip[T, U {{ .Constraint }}](a {{ .TypeName }}[T], b {{ .TypeName }}[U]) {{ .TypeName }}[pair.Pair[T, U]] {
	return FromIterator[pair.Pair[T, U]](iterator.Zip(a.Iter(), b.Iter()))
}
"#,
    ),
    (
        "SumWithInit",
        r#"
// SumWithInit combines init with every element of xs using s.
func SumWithInit[T {{ .Constraint }}](init T, xs {{ .TypeName }}[T], s algebra.Semigroup[T]) T {
	return iterator.Fold[T, T](init, xs.Iter(), s.Combine)
}
"#,
    ),
    (
        "Sum",
        r#"
// Sum combines every element of xs using m.
// It returns m.Empty() when xs is empty.
func Sum[T {{ .Constraint }}](xs {{ .TypeName }}[T], m algebra.Monoid[T]) T {
	return iterator.Fold[T, T](m.Empty(), xs.Iter(), m.Combine)
}
"#,
    ),
];
