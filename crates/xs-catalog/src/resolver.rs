use serde::Serialize;
use tracing::debug;
use xs_core::{
    CommandHash, CommandSyntax, GameVersion, ParameterSyntax, ScriptObjectGroup, SyntaxError,
    Token, TokenKind, EXPRESSION_PARAMETER, LABEL_DECLARATION_PARAMETER,
    SCRIPT_ARGUMENT_PARAMETER,
};

use crate::SyntaxCatalog;

/// Locates the language string behind a game or script object token.
pub trait ObjectLookup: Send + Sync {
    /// Returns `(page, id)` of the string naming the object.
    fn locate(&self, token: &Token) -> Option<(u32, u32)>;
}

/// Lookup for callers without a string library; every object is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObjects;

impl ObjectLookup for NoObjects {
    fn locate(&self, _token: &Token) -> Option<(u32, u32)> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundArgument<'a> {
    pub parameter: &'a ParameterSyntax,
    pub token: Token,
    pub object_group: Option<ScriptObjectGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<'a> {
    pub command: &'a CommandSyntax,
    pub hash: String,
    pub arguments: Vec<BoundArgument<'a>>,
}

pub struct Resolver<'a> {
    catalog: &'a SyntaxCatalog,
    objects: &'a dyn ObjectLookup,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a SyntaxCatalog, objects: &'a dyn ObjectLookup) -> Self {
        Self { catalog, objects }
    }

    /// Identifies the command a tokenized statement invokes and binds its
    /// arguments.
    ///
    /// Statements whose shape matches nothing get two more chances: a plain
    /// `$var = ...` assignment resolves to the expression command with the
    /// right-hand side bound to the expression parameter, and `name:` resolves
    /// to the label declaration command.
    pub fn resolve(
        &self,
        tokens: &[Token],
        version: GameVersion,
    ) -> Result<Resolution<'a>, SyntaxError> {
        let shape = CommandHash::from_tokens(tokens);
        match self
            .catalog
            .find_by_hash(shape.hash(), shape.parameters().len(), version)
        {
            Ok(command) => {
                let hash = shape.hash().to_string();
                let arguments = self.bind(command, shape.into_parameters())?;
                debug!(id = command.id(), %hash, "resolved statement");
                Ok(Resolution {
                    command,
                    hash,
                    arguments,
                })
            }
            Err(error @ SyntaxError::NotFound { .. }) => self
                .resolve_expression(tokens, version)
                .or_else(|| self.resolve_label(tokens, version))
                .unwrap_or(Err(error)),
            Err(error) => Err(error),
        }
    }

    fn bind(
        &self,
        command: &'a CommandSyntax,
        tokens: Vec<Token>,
    ) -> Result<Vec<BoundArgument<'a>>, SyntaxError> {
        let declared = command.parameters();
        let fixed = if command.is_variadic() {
            declared.len() - 1
        } else {
            declared.len()
        };

        tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                let parameter = if index < fixed {
                    &declared[index]
                } else {
                    &SCRIPT_ARGUMENT_PARAMETER
                };
                self.annotate(parameter, token)
            })
            .collect()
    }

    fn annotate(
        &self,
        parameter: &'a ParameterSyntax,
        token: Token,
    ) -> Result<BoundArgument<'a>, SyntaxError> {
        let object_group = match token.kind {
            TokenKind::GameObject | TokenKind::ScriptObject => {
                let (page, id) = self.objects.locate(&token).ok_or_else(|| {
                    SyntaxError::argument(format!("Unknown object \"{}\".", token.text))
                })?;
                Some(ScriptObjectGroup::classify(page, id)?)
            }
            _ => None,
        };
        Ok(BoundArgument {
            parameter,
            token,
            object_group,
        })
    }

    fn resolve_expression(
        &self,
        tokens: &[Token],
        version: GameVersion,
    ) -> Option<Result<Resolution<'a>, SyntaxError>> {
        let [target, assign, rest @ ..] = tokens else {
            return None;
        };
        if target.kind != TokenKind::Variable
            || assign.kind != TokenKind::BinaryOp
            || assign.text != "="
            || rest.is_empty()
            || !rest.iter().all(|token| is_expression_operand(token.kind))
        {
            return None;
        }

        let command = match self.fallback_command("=", 2, version)? {
            Ok(command) => command,
            Err(error) => return Some(Err(error)),
        };
        let target_parameter = command.parameters().first()?;
        Some(self.bind_expression(command, target_parameter, target, rest))
    }

    /// Lookup for a fallback shape. Only a missing shape declines the
    /// fallback; every other catalog error is reported.
    fn fallback_command(
        &self,
        hash: &str,
        argument_count: usize,
        version: GameVersion,
    ) -> Option<Result<&'a CommandSyntax, SyntaxError>> {
        match self.catalog.find_by_hash(hash, argument_count, version) {
            Err(SyntaxError::NotFound { .. }) => None,
            other => Some(other),
        }
    }

    fn bind_expression(
        &self,
        command: &'a CommandSyntax,
        target_parameter: &'a ParameterSyntax,
        target: &Token,
        rest: &[Token],
    ) -> Result<Resolution<'a>, SyntaxError> {
        let mut arguments = vec![self.annotate(target_parameter, target.clone())?];
        for token in rest {
            arguments.push(self.annotate(&EXPRESSION_PARAMETER, token.clone())?);
        }
        Ok(Resolution {
            command,
            hash: command.hash().to_string(),
            arguments,
        })
    }

    fn resolve_label(
        &self,
        tokens: &[Token],
        version: GameVersion,
    ) -> Option<Result<Resolution<'a>, SyntaxError>> {
        let [label, colon] = tokens else {
            return None;
        };
        if label.kind != TokenKind::Label
            || !matches!(colon.kind, TokenKind::Text | TokenKind::BinaryOp)
            || colon.text != ":"
        {
            return None;
        }

        let command = match self.fallback_command(":", 1, version)? {
            Ok(command) => command,
            Err(error) => return Some(Err(error)),
        };
        Some(Ok(Resolution {
            command,
            hash: command.hash().to_string(),
            arguments: vec![BoundArgument {
                parameter: &LABEL_DECLARATION_PARAMETER,
                token: label.clone(),
                object_group: None,
            }],
        }))
    }
}

/// Token kinds that may make up the right-hand side of an assignment.
fn is_expression_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Variable
            | TokenKind::Literal
            | TokenKind::BinaryOp
            | TokenKind::UnaryOp
            | TokenKind::GameObject
            | TokenKind::ScriptObject
            | TokenKind::Null
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use xs_core::{object_group::page, ParameterKind};
    use xs_legacy::{read_definitions, ReaderOptions};

    use super::*;

    const DEFINITIONS: &str = "\
X3 TC AP
1040
SHIP_ACTION
$0 $1 -> fly to sector $2
RetVar/IF
Var/Ship
Var/Sector
-------------- END DEFINITION ---------------
X3 TC AP
1041
SHIP_ACTION
$0 $1 -> fly to sector $2 $3
RetVar/IF
Var/Ship
Var/Sector
Var/Number
-------------- END DEFINITION ---------------
TC AP
102
SCRIPT_PROPERTY
$0 call script $1 : $2
RetVar
Script Name
Script Argument
-------------- END DEFINITION ---------------
X3 TC AP
104
FLOW_CONTROL
$0 = $1
RetVar
Expression
-------------- END DEFINITION ---------------
TC AP
707
STATION_PROPERTY
$0 = $1 -> get serial name of station
RetVar
Var/Station
-------------- END DEFINITION ---------------
X3 TC AP
3
FLOW_CONTROL
$0:
Label Name
-------------- END DEFINITION ---------------
";

    struct Pages;

    impl ObjectLookup for Pages {
        fn locate(&self, token: &Token) -> Option<(u32, u32)> {
            match token.text.as_str() {
                "{Argon Prime}" => Some((page::SECTORS, 1_000_101)),
                "{Mystery}" => Some((9999, 1)),
                _ => None,
            }
        }
    }

    fn catalog() -> SyntaxCatalog {
        SyntaxCatalog::new(
            read_definitions(DEFINITIONS, ReaderOptions::default()).expect("definitions parse"),
        )
    }

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    fn fly(sector: &str, speed: Option<&str>) -> Vec<Token> {
        let mut tokens = vec![
            tok(TokenKind::Variable, "$ok"),
            tok(TokenKind::Variable, "$ship"),
            tok(TokenKind::BinaryOp, "->"),
            tok(TokenKind::Text, "fly"),
            tok(TokenKind::Keyword, "TO"),
            tok(TokenKind::Text, "sector"),
            tok(TokenKind::GameObject, sector),
        ];
        if let Some(speed) = speed {
            tokens.push(tok(TokenKind::Literal, speed));
        }
        tokens
    }

    #[test]
    fn resolves_overloads_by_argument_count_and_classifies_objects() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &Pages);

        let short = resolver
            .resolve(&fly("{Argon Prime}", None), GameVersion::TerranConflict)
            .expect("three arguments");
        assert_eq!(short.command.id(), 1040);
        assert_eq!(short.hash, "->flytosector");
        assert_eq!(
            short
                .arguments
                .iter()
                .map(|argument| argument.parameter.kind)
                .collect::<Vec<_>>(),
            vec![
                ParameterKind::RetVarIf,
                ParameterKind::VarShip,
                ParameterKind::VarSector
            ]
        );
        assert_eq!(short.arguments[2].object_group, Some(ScriptObjectGroup::Sector));
        assert_eq!(short.arguments[0].object_group, None);

        let long = resolver
            .resolve(&fly("{Argon Prime}", Some("300")), GameVersion::TerranConflict)
            .expect("four arguments");
        assert_eq!(long.command.id(), 1041);
        assert_eq!(long.arguments[3].token, tok(TokenKind::Literal, "300"));
    }

    #[test]
    fn unrecognized_object_pages_fail_loudly() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &Pages);
        let error = resolver
            .resolve(&fly("{Mystery}", None), GameVersion::Reunion)
            .expect_err("page 9999 is not classified");
        assert_eq!(error.code(), "ARGUMENT_ERROR");

        let unresolved = Resolver::new(&catalog, &NoObjects)
            .resolve(&fly("{Argon Prime}", None), GameVersion::Reunion)
            .expect_err("no string library");
        assert_eq!(unresolved.code(), "ARGUMENT_ERROR");
    }

    #[test]
    fn variadic_tail_binds_to_script_argument() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &NoObjects);
        let tokens = vec![
            tok(TokenKind::Variable, "$result"),
            tok(TokenKind::Text, "call"),
            tok(TokenKind::Text, "script"),
            tok(TokenKind::Literal, "'plugin.trade'"),
            tok(TokenKind::Text, ":"),
            tok(TokenKind::Literal, "1"),
            tok(TokenKind::Variable, "$two"),
        ];

        let resolution = resolver
            .resolve(&tokens, GameVersion::AlbionPrelude)
            .expect("variadic call");
        assert_eq!(resolution.command.id(), 102);
        assert_eq!(resolution.arguments.len(), 4);
        assert!(std::ptr::eq(
            resolution.arguments[3].parameter,
            &SCRIPT_ARGUMENT_PARAMETER
        ));

        let error = resolver
            .resolve(&tokens, GameVersion::Reunion)
            .expect_err("script calls are TC and later here");
        assert_eq!(error.code(), "NOT_FOUND");
    }

    #[test]
    fn assignments_fall_back_to_the_expression_command() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &NoObjects);
        let tokens = vec![
            tok(TokenKind::Variable, "$x"),
            tok(TokenKind::BinaryOp, "="),
            tok(TokenKind::Variable, "$a"),
            tok(TokenKind::BinaryOp, "+"),
            tok(TokenKind::Literal, "1"),
        ];
        let resolution = resolver
            .resolve(&tokens, GameVersion::Reunion)
            .expect("expression statement");
        assert_eq!(resolution.command.id(), 104);
        assert_eq!(resolution.arguments.len(), 4);
        assert_eq!(resolution.arguments[0].parameter.kind, ParameterKind::RetVar);
        assert!(resolution.arguments[1..]
            .iter()
            .all(|argument| std::ptr::eq(argument.parameter, &EXPRESSION_PARAMETER)));
    }

    #[test]
    fn resolver_is_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Resolver<'static>>();

        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &Pages);
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        resolver
                            .resolve(&fly("{Argon Prime}", None), GameVersion::Reunion)
                            .map(|resolution| resolution.command.id())
                    })
                })
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().expect("resolver thread"), Ok(1040));
            }
        });
    }

    #[test]
    fn misspelled_commands_are_not_taken_for_assignments() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &NoObjects);
        let tokens = vec![
            tok(TokenKind::Variable, "$x"),
            tok(TokenKind::BinaryOp, "="),
            tok(TokenKind::Variable, "$st"),
            tok(TokenKind::BinaryOp, "->"),
            tok(TokenKind::Text, "get"),
            tok(TokenKind::Text, "serail"),
            tok(TokenKind::Text, "name"),
            tok(TokenKind::Text, "of"),
            tok(TokenKind::Text, "station"),
        ];
        let error = resolver
            .resolve(&tokens, GameVersion::TerranConflict)
            .expect_err("serail is a typo");
        assert_eq!(
            error,
            SyntaxError::not_found("=->getserailnameofstation", "no command has this shape")
        );

        let mut spelled = tokens.clone();
        spelled[5] = tok(TokenKind::Text, "serial");
        let resolution = resolver
            .resolve(&spelled, GameVersion::TerranConflict)
            .expect("correct spelling");
        assert_eq!(resolution.command.id(), 707);
    }

    #[test]
    fn expression_fallback_reports_ambiguous_definitions() {
        let duplicate = "\
X3 TC AP
105
FLOW_CONTROL
$0 = $1
RetVar
Expression
-------------- END DEFINITION ---------------
";
        let catalog = SyntaxCatalog::new(
            read_definitions(&format!("{}{}", DEFINITIONS, duplicate), ReaderOptions::default())
                .expect("definitions parse"),
        );
        let resolver = Resolver::new(&catalog, &NoObjects);
        let tokens = vec![
            tok(TokenKind::Variable, "$x"),
            tok(TokenKind::BinaryOp, "="),
            tok(TokenKind::Variable, "$a"),
            tok(TokenKind::BinaryOp, "+"),
            tok(TokenKind::Literal, "1"),
        ];
        let error = resolver
            .resolve(&tokens, GameVersion::Reunion)
            .expect_err("two expression commands in X3");
        assert_eq!(
            error,
            SyntaxError::AmbiguousMatch {
                hash: "=".to_string(),
                candidates: vec![104, 105],
            }
        );
    }

    #[test]
    fn label_fallback_requires_a_colon_operator() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &NoObjects);
        let tokens = vec![tok(TokenKind::Label, "start"), tok(TokenKind::Literal, ":")];
        let error = resolver
            .resolve(&tokens, GameVersion::Reunion)
            .expect_err("a literal colon is not a label definition");
        assert_eq!(error.code(), "NOT_FOUND");
    }

    #[test]
    fn label_definitions_bind_the_label_sentinel() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &NoObjects);
        let tokens = vec![tok(TokenKind::Label, "start"), tok(TokenKind::Text, ":")];
        let resolution = resolver
            .resolve(&tokens, GameVersion::Reunion)
            .expect("label definition");
        assert_eq!(resolution.command.id(), 3);
        assert_eq!(resolution.arguments[0].parameter, &LABEL_DECLARATION_PARAMETER);
        assert_eq!(resolution.arguments[0].token.text, "start");
    }

    #[test]
    fn unknown_statements_report_not_found() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, &NoObjects);
        let error = resolver
            .resolve(
                &[tok(TokenKind::Text, "dance"), tok(TokenKind::Literal, "3")],
                GameVersion::Reunion,
            )
            .expect_err("dance is not a command");
        assert_eq!(
            error,
            SyntaxError::not_found("dance", "no command has this shape")
        );
    }
}
