/// Something that can be flattened into an ordered list of usernames.
///
/// Implemented for single names and for (possibly nested) collections of names,
/// so `"a"`, `["a", "b"]` and `vec![vec!["a"], vec!["b"]]` are all accepted.
pub trait IntoUsernames {
    /// Append the usernames in order to `usernames`.
    fn push_usernames(self, usernames: &mut Vec<String>);

    /// Flatten into a new list of usernames.
    fn into_usernames(self) -> Vec<String>
    where
        Self: Sized,
    {
        let mut usernames = Vec::new();
        self.push_usernames(&mut usernames);
        usernames
    }
}

impl IntoUsernames for &str {
    fn push_usernames(self, usernames: &mut Vec<String>) {
        usernames.push(self.to_string());
    }
}

impl IntoUsernames for String {
    fn push_usernames(self, usernames: &mut Vec<String>) {
        usernames.push(self);
    }
}

impl IntoUsernames for &String {
    fn push_usernames(self, usernames: &mut Vec<String>) {
        usernames.push(self.clone());
    }
}

impl<T> IntoUsernames for Vec<T>
where
    T: IntoUsernames,
{
    fn push_usernames(self, usernames: &mut Vec<String>) {
        for item in self {
            item.push_usernames(usernames);
        }
    }
}

impl<'a, T> IntoUsernames for &'a [T]
where
    &'a T: IntoUsernames,
{
    fn push_usernames(self, usernames: &mut Vec<String>) {
        for item in self {
            item.push_usernames(usernames);
        }
    }
}

impl<'a, T> IntoUsernames for &'a Vec<T>
where
    &'a T: IntoUsernames,
{
    fn push_usernames(self, usernames: &mut Vec<String>) {
        self.as_slice().push_usernames(usernames);
    }
}

impl<T, const N: usize> IntoUsernames for [T; N]
where
    T: IntoUsernames,
{
    fn push_usernames(self, usernames: &mut Vec<String>) {
        for item in self {
            item.push_usernames(usernames);
        }
    }
}

impl<'a> IntoUsernames for &'a &str {
    fn push_usernames(self, usernames: &mut Vec<String>) {
        (*self).push_usernames(usernames);
    }
}

/// Join usernames into the value of the `users` query parameter.
pub(crate) fn join(usernames: &[String]) -> String {
    usernames.join(",")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single() {
        assert_eq!("damiancaruso".into_usernames(), ["damiancaruso"]);
        assert_eq!(
            String::from("damiancaruso").into_usernames(),
            ["damiancaruso"]
        );
    }

    #[test]
    fn collections() {
        assert_eq!(["a", "b"].into_usernames(), ["a", "b"]);
        assert_eq!(vec!["a", "b", "c"].into_usernames(), ["a", "b", "c"]);

        let names = vec![String::from("a"), String::from("b")];
        assert_eq!((&names).into_usernames(), ["a", "b"]);
        assert_eq!(names.as_slice().into_usernames(), ["a", "b"]);

        let refs = ["x", "y"];
        assert_eq!(refs.as_slice().into_usernames(), ["x", "y"]);
    }

    #[test]
    fn nested_keeps_order() {
        let nested = vec![vec!["a", "b"], vec![], vec!["c"]];
        assert_eq!(nested.into_usernames(), ["a", "b", "c"]);
    }

    #[test]
    fn empty() {
        let empty: Vec<&str> = Vec::new();
        let usernames = empty.into_usernames();
        assert!(usernames.is_empty());
        assert_eq!(join(&usernames), "");
    }

    #[test]
    fn join_commas() {
        assert_eq!(join(&["a".into()]), "a");
        assert_eq!(join(&["a".into(), "b".into()]), "a,b");
    }
}
